pub mod attendance;
pub mod class;
pub mod student;
