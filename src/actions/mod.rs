//! Page actions: the submit and fetch routines behind each page

pub mod auth;
pub mod projects;
