pub mod home;
pub mod login;
pub mod projects;
pub mod register;
