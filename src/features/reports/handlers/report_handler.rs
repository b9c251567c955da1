use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireAdmin, RequireDepartment};
use crate::features::auth::model::Principal;
use crate::features::reports::dtos::{ReportResponseDto, UpdateReportStatusDto};
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::shared::types::ErrorResponse;

fn to_dtos(reports: Vec<Report>) -> Vec<ReportResponseDto> {
    reports.into_iter().map(ReportResponseDto::from).collect()
}

/// List reports routed to the calling department
#[utoipa::path(
    get,
    path = "/reports/department",
    responses(
        (status = 200, description = "Reports for this department, newest first", body = Vec<ReportResponseDto>),
        (status = 401, description = "Access token required", body = ErrorResponse),
        (status = 403, description = "Invalid token or not a department", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_department_reports(
    RequireDepartment(principal): RequireDepartment,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = service.list_for_department(&principal).await?;
    Ok(Json(to_dtos(reports)))
}

/// List every report
#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<ReportResponseDto>),
        (status = 401, description = "Access token required", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reports(
    RequireAdmin(principal): RequireAdmin,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = service.list_all(&principal).await?;
    Ok(Json(to_dtos(reports)))
}

/// Get a single report
#[utoipa::path(
    get,
    path = "/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ReportResponseDto),
        (status = 401, description = "Access token required", body = ErrorResponse),
        (status = 403, description = "Invalid token or report routed elsewhere", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn get_report(
    principal: Principal,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponseDto>> {
    let report = service.get_one(&principal, &id).await?;
    Ok(Json(report.into()))
}

/// Update a report's status
#[utoipa::path(
    put,
    path = "/reports/{id}/status",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Updated report", body = ReportResponseDto),
        (status = 400, description = "Status is required", body = ErrorResponse),
        (status = 401, description = "Access token required", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn update_report_status(
    RequireAdmin(principal): RequireAdmin,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ReportResponseDto>> {
    let report = service.update_status(&principal, &id, dto).await?;
    Ok(Json(report.into()))
}
