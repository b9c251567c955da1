use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AdminLoginResponseDto, DepartmentLoginResponseDto, LoginRequestDto,
};
use crate::features::auth::model::Principal;
use crate::features::auth::password::verify_password_blocking;
use crate::features::auth::repositories::AdminRepository;
use crate::features::auth::session::SessionManager;
use crate::features::departments::repositories::DepartmentRepository;
use crate::shared::constants::{CREDENTIALS_REQUIRED, INVALID_CREDENTIALS};

/// Service for department and admin login
pub struct AuthService {
    departments: Arc<dyn DepartmentRepository>,
    admins: Arc<dyn AdminRepository>,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        admins: Arc<dyn AdminRepository>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            departments,
            admins,
            sessions,
        }
    }

    /// Authenticate a department and issue a session
    pub async fn login_department(&self, dto: LoginRequestDto) -> Result<DepartmentLoginResponseDto> {
        dto.validate()
            .map_err(|_| AppError::Validation(CREDENTIALS_REQUIRED.to_string()))?;

        let department = self
            .departments
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password_blocking(dto.password, department.password_hash.clone()).await? {
            tracing::info!("Rejected department login for {}", department.email);
            return Err(invalid_credentials());
        }

        let token = self.sessions.issue(&Principal::Department {
            id: department.id,
            name: department.name.clone(),
            email: department.email.clone(),
        })?;

        tracing::info!("Department logged in: {}", department.name);

        Ok(DepartmentLoginResponseDto {
            success: true,
            token,
            department: department.into(),
        })
    }

    /// Authenticate an admin and issue a session
    pub async fn login_admin(&self, dto: LoginRequestDto) -> Result<AdminLoginResponseDto> {
        dto.validate()
            .map_err(|_| AppError::Validation(CREDENTIALS_REQUIRED.to_string()))?;

        let admin = self
            .admins
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password_blocking(dto.password, admin.password_hash.clone()).await? {
            tracing::info!("Rejected admin login for {}", admin.email);
            return Err(invalid_credentials());
        }

        let token = self.sessions.issue(&Principal::Admin {
            id: admin.id,
            email: admin.email.clone(),
        })?;

        tracing::info!("Admin logged in: {}", admin.email);

        Ok(AdminLoginResponseDto {
            success: true,
            token,
            admin: admin.into(),
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized(INVALID_CREDENTIALS.to_string())
}
