use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::departments::models::Department;

/// Public view of a department. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub display_name: String,
    pub description: String,
}

impl From<Department> for DepartmentResponseDto {
    fn from(d: Department) -> Self {
        Self {
            id: d.id,
            name: d.name,
            email: d.email,
            display_name: d.display_name,
            description: d.description,
        }
    }
}
