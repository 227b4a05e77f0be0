pub mod home;
pub mod story;
