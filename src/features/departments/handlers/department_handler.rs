use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::departments::dtos::DepartmentResponseDto;
use crate::features::departments::services::DepartmentService;

/// List all departments
#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "Department roster", body = Vec<DepartmentResponseDto>),
        (status = 500, description = "Database error", body = crate::shared::types::ErrorResponse)
    ),
    tag = "departments"
)]
pub async fn list_departments(
    State(service): State<Arc<DepartmentService>>,
) -> Result<Json<Vec<DepartmentResponseDto>>> {
    let departments = service.list().await?;
    Ok(Json(departments))
}
