pub mod auth_handler;

pub use auth_handler::{__path_login_admin, __path_login_department, login_admin, login_department};
