pub mod about;
pub mod contact;
pub mod expansion;
pub mod home;
pub mod impact;
pub mod not_found;
pub mod solutions;
pub mod technology;
