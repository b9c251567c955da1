pub mod auth;
pub mod departments;
pub mod reports;
