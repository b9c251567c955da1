use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::router;
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::departments::{dtos as departments_dtos, handlers as departments_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::{ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        router::healthz,
        // Auth
        auth_handlers::login_department,
        auth_handlers::login_admin,
        // Departments
        departments_handlers::list_departments,
        // Reports
        reports_handlers::list_department_reports,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::update_report_status,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthDepartmentDto,
            auth_dtos::DepartmentLoginResponseDto,
            auth_dtos::AuthAdminDto,
            auth_dtos::AdminLoginResponseDto,
            departments_dtos::DepartmentResponseDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::UpdateReportStatusDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "auth", description = "Department and admin login"),
        (name = "departments", description = "Municipal department roster (public)"),
        (name = "reports", description = "Citizen reports, scoped by role"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "CivicLens API",
        version = "0.1.0",
        description = "Municipal civic-issue reporting backend",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
