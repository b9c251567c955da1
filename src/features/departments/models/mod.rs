mod department;

pub use department::{Department, NewDepartment};
