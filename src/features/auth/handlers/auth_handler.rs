use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{
    AdminLoginResponseDto, DepartmentLoginResponseDto, LoginRequestDto,
};
use crate::features::auth::services::AuthService;
use crate::shared::types::ErrorResponse;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Login as a department
#[utoipa::path(
    post,
    path = "/auth/department",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = DepartmentLoginResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_department(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<DepartmentLoginResponseDto>> {
    let response = service.login_department(dto).await?;
    Ok(Json(response))
}

/// Login as an admin
#[utoipa::path(
    post,
    path = "/auth/admin",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_admin(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<AdminLoginResponseDto>> {
    let response = service.login_admin(dto).await?;
    Ok(Json(response))
}
