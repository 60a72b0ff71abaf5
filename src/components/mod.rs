//! Reusable UI components

pub mod create_project;
pub mod loading;
pub mod nav;
pub mod status;

pub use create_project::CreateProject;
pub use loading::LoadingText;
pub use nav::Nav;
pub use status::StatusMessage;
