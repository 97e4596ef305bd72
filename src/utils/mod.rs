pub mod acknowledgment;
pub mod timer;
pub mod validation;
