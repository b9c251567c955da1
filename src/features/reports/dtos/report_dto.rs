use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::Report;
use crate::features::reports::routing::department_for;

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: String,
    pub user_id: String,
    pub photo_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub locality: String,
    pub description: String,
    pub ai_category: String,
    pub ai_summary: Option<String>,
    pub ai_severity_score: Option<f64>,
    pub ai_urgency_level: Option<String>,
    /// RECEIVED, IN_PROGRESS, RESOLVED or any other workflow value
    #[schema(value_type = String, example = "RECEIVED")]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub reopen_count: i32,
    /// Department the category routes to
    pub department: String,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        let department = department_for(&r.ai_category).to_string();
        Self {
            id: r.id,
            user_id: r.user_id,
            photo_url: r.photo_url,
            latitude: r.latitude,
            longitude: r.longitude,
            locality: r.locality,
            description: r.description,
            ai_category: r.ai_category,
            ai_summary: r.ai_summary,
            ai_severity_score: r.ai_severity_score,
            ai_urgency_level: r.ai_urgency_level,
            status: r.status.into(),
            created_at: r.created_at,
            updated_at: r.updated_at,
            resolved_by: r.resolved_by,
            resolved_at: r.resolved_at,
            reopen_count: r.reopen_count,
            department,
        }
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReportStatusDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "RESOLVED")]
    pub status: String,
    /// Who resolved the report. Omitting it clears the previous value.
    pub resolved_by: Option<String>,
}
