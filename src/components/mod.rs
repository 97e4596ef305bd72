pub mod count_up;
pub mod footer;
pub mod navbar;
pub mod particles;
