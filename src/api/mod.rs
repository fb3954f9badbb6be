pub mod admin;
pub mod attendance;
pub mod pages;
pub mod student;
