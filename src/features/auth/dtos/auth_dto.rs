use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::models::Admin;
use crate::features::departments::models::Department;

/// Request DTO for department and admin login
///
/// Missing fields deserialize as empty strings so they surface as a
/// validation error rather than a JSON parse error.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Department profile returned on login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthDepartmentDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub display_name: String,
    pub description: String,
}

impl From<Department> for AuthDepartmentDto {
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

/// Response DTO for department login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentLoginResponseDto {
    pub success: bool,
    /// Signed session token, valid for 24 hours
    pub token: String,
    pub department: AuthDepartmentDto,
}

/// Admin profile returned on login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthAdminDto {
    pub id: i64,
    pub email: String,
}

impl From<Admin> for AuthAdminDto {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            email: a.email,
        }
    }
}

/// Response DTO for admin login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginResponseDto {
    pub success: bool,
    pub token: String,
    pub admin: AuthAdminDto,
}
