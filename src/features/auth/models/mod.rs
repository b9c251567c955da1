mod admin;

pub use admin::{Admin, NewAdmin};
