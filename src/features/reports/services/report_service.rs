use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{Principal, Role};
use crate::features::reports::dtos::UpdateReportStatusDto;
use crate::features::reports::models::{Report, ReportStatus, StatusUpdate};
use crate::features::reports::policy::{can_view_report, filter_reports_for_department, require_role};
use crate::features::reports::repositories::ReportRepository;
use crate::shared::constants::{ACCESS_DENIED, REPORT_NOT_FOUND, STATUS_REQUIRED};

/// Service for role-scoped report operations
pub struct ReportService {
    reports: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(reports: Arc<dyn ReportRepository>) -> Self {
        Self { reports }
    }

    /// Reports routed to the calling department, newest first
    pub async fn list_for_department(&self, principal: &Principal) -> Result<Vec<Report>> {
        require_role(principal, Role::Department)?;

        let reports = self.reports.list_newest_first().await?;
        Ok(filter_reports_for_department(principal, reports))
    }

    /// Every report, newest first (admin only)
    pub async fn list_all(&self, principal: &Principal) -> Result<Vec<Report>> {
        require_role(principal, Role::Admin)?;
        self.reports.list_newest_first().await
    }

    /// Get a report the caller is allowed to see
    pub async fn get_one(&self, principal: &Principal, id: &str) -> Result<Report> {
        let report = self
            .reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(REPORT_NOT_FOUND.to_string()))?;

        if !can_view_report(principal, &report) {
            tracing::warn!(
                "Principal {} ({}) denied access to report {}",
                principal.email(),
                principal.role(),
                id
            );
            return Err(AppError::Forbidden(ACCESS_DENIED.to_string()));
        }

        Ok(report)
    }

    /// Change a report's status (admin only)
    pub async fn update_status(
        &self,
        principal: &Principal,
        id: &str,
        dto: UpdateReportStatusDto,
    ) -> Result<Report> {
        require_role(principal, Role::Admin)?;
        dto.validate()
            .map_err(|_| AppError::Validation(STATUS_REQUIRED.to_string()))?;

        let update = StatusUpdate {
            status: ReportStatus::from(dto.status),
            resolved_by: dto.resolved_by,
        };

        let report = self
            .reports
            .update_status(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound(REPORT_NOT_FOUND.to_string()))?;

        tracing::info!(
            "Report {} moved to {} by {}",
            report.id,
            report.status,
            principal.email()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        admin_principal, department_principal, sample_report, InMemoryReportRepository,
    };
    use chrono::Duration;

    fn service_with(reports: Vec<Report>) -> ReportService {
        ReportService::new(Arc::new(InMemoryReportRepository::with_reports(reports)))
    }

    /// Reports created one hour apart, in the given order
    fn timeline(entries: &[(&str, &str)]) -> Vec<Report> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (id, category))| {
                let mut report = sample_report(id, category);
                report.created_at += Duration::hours(i as i64);
                report.updated_at = report.created_at;
                report
            })
            .collect()
    }

    fn ids(reports: &[Report]) -> Vec<&str> {
        reports.iter().map(|r| r.id.as_str()).collect()
    }

    fn status_dto(status: &str, resolved_by: Option<&str>) -> UpdateReportStatusDto {
        UpdateReportStatusDto {
            status: status.to_string(),
            resolved_by: resolved_by.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_list_for_department_filters_by_routing() {
        let service = service_with(timeline(&[
            ("r1", "Pothole"),
            ("r2", "Lighting"),
            ("r3", "Pothole"),
            ("r4", "Graffiti"),
        ]));

        let roads = service
            .list_for_department(&department_principal("Roads"))
            .await
            .unwrap();
        assert_eq!(ids(&roads), vec!["r3", "r1"]);

        let infra = service
            .list_for_department(&department_principal("Infrastructure"))
            .await
            .unwrap();
        assert_eq!(ids(&infra), vec!["r4"]);
    }

    #[tokio::test]
    async fn test_list_for_department_rejects_admin() {
        let service = service_with(timeline(&[("r1", "Pothole")]));
        let err = service
            .list_for_department(&admin_principal())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first_and_admin_only() {
        let service = service_with(timeline(&[
            ("r1", "Pothole"),
            ("r2", "Noise"),
            ("r3", "Water"),
        ]));

        let all = service.list_all(&admin_principal()).await.unwrap();
        assert_eq!(ids(&all), vec!["r3", "r2", "r1"]);

        let err = service
            .list_all(&department_principal("Roads"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_get_one_checks_existence_then_access() {
        let service = service_with(timeline(&[("r1", "Pothole"), ("r2", "Noise")]));
        let roads = department_principal("Roads");

        assert_eq!(service.get_one(&roads, "r1").await.unwrap().id, "r1");
        assert_eq!(service.get_one(&admin_principal(), "r2").await.unwrap().id, "r2");

        match service.get_one(&roads, "r2").await {
            Err(AppError::Forbidden(msg)) => assert_eq!(msg, ACCESS_DENIED),
            other => panic!("expected Forbidden, got {:?}", other),
        }
        match service.get_one(&roads, "does-not-exist").await {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, REPORT_NOT_FOUND),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_status_to_resolved() {
        let service = service_with(timeline(&[("r1", "Pothole")]));
        let before = service.get_one(&admin_principal(), "r1").await.unwrap();

        let updated = service
            .update_status(&admin_principal(), "r1", status_dto("RESOLVED", Some("crew-7")))
            .await
            .unwrap();

        assert_eq!(updated.status, ReportStatus::Resolved);
        assert!(updated.resolved_at.is_some());
        assert_eq!(updated.resolved_by.as_deref(), Some("crew-7"));
        assert!(updated.updated_at > before.updated_at);

        // Persisted, not just returned
        let stored = service.get_one(&admin_principal(), "r1").await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_status_to_in_progress_keeps_resolved_at_empty() {
        let service = service_with(timeline(&[("r1", "Pothole")]));

        let updated = service
            .update_status(&admin_principal(), "r1", status_dto("IN_PROGRESS", None))
            .await
            .unwrap();

        assert_eq!(updated.status, ReportStatus::InProgress);
        assert_eq!(updated.resolved_at, None);
    }

    #[tokio::test]
    async fn test_reopening_counts() {
        let service = service_with(timeline(&[("r1", "Pothole")]));
        let admin = admin_principal();

        service
            .update_status(&admin, "r1", status_dto("RESOLVED", None))
            .await
            .unwrap();
        let reopened = service
            .update_status(&admin, "r1", status_dto("IN_PROGRESS", None))
            .await
            .unwrap();

        assert_eq!(reopened.reopen_count, 1);
        assert!(reopened.resolved_at.is_some());
    }

    #[tokio::test]
    async fn test_update_status_validation_and_errors() {
        let service = service_with(timeline(&[("r1", "Pothole")]));

        match service
            .update_status(&admin_principal(), "r1", status_dto("", None))
            .await
        {
            Err(AppError::Validation(msg)) => assert_eq!(msg, STATUS_REQUIRED),
            other => panic!("expected Validation, got {:?}", other),
        }

        let err = service
            .update_status(&admin_principal(), "missing", status_dto("RESOLVED", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // Role is checked before the body
        let err = service
            .update_status(&department_principal("Roads"), "r1", status_dto("", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_update_status_accepts_custom_status() {
        let service = service_with(timeline(&[("r1", "Pothole")]));

        let updated = service
            .update_status(&admin_principal(), "r1", status_dto("ESCALATED", None))
            .await
            .unwrap();
        assert_eq!(updated.status.as_str(), "ESCALATED");
    }
}
