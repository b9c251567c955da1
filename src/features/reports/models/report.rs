use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a report.
///
/// The well-known values get their own variants. Anything else coming from
/// storage or from an admin update is kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Received,
    InProgress,
    Resolved,
    Other(String),
}

impl ReportStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatus::Received => "RECEIVED",
            ReportStatus::InProgress => "IN_PROGRESS",
            ReportStatus::Resolved => "RESOLVED",
            ReportStatus::Other(s) => s,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ReportStatus::Resolved)
    }
}

impl From<String> for ReportStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "RECEIVED" => ReportStatus::Received,
            "IN_PROGRESS" => ReportStatus::InProgress,
            "RESOLVED" => ReportStatus::Resolved,
            _ => ReportStatus::Other(s),
        }
    }
}

impl From<&str> for ReportStatus {
    fn from(s: &str) -> Self {
        ReportStatus::from(s.to_string())
    }
}

impl From<ReportStatus> for String {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Citizen report as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
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
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resolved_by: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub reopen_count: i32,
}

/// Status change requested by an admin
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: ReportStatus,
    pub resolved_by: Option<String>,
}

impl Report {
    /// Apply a status change at `now`.
    ///
    /// `resolved_by` is overwritten (possibly with `None`). `resolved_at` is
    /// stamped on every move to RESOLVED and kept otherwise. Leaving RESOLVED
    /// counts as a reopen.
    pub fn apply_status_update(&mut self, update: &StatusUpdate, now: DateTime<Utc>) {
        if self.status.is_resolved() && !update.status.is_resolved() {
            self.reopen_count += 1;
        }
        if update.status.is_resolved() {
            self.resolved_at = Some(now);
        }
        self.status = update.status.clone();
        self.resolved_by = update.resolved_by.clone();
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_report;
    use chrono::Duration;

    #[test]
    fn test_status_parses_known_values() {
        assert_eq!(ReportStatus::from("RECEIVED"), ReportStatus::Received);
        assert_eq!(ReportStatus::from("IN_PROGRESS"), ReportStatus::InProgress);
        assert_eq!(ReportStatus::from("RESOLVED"), ReportStatus::Resolved);
    }

    #[test]
    fn test_status_keeps_unknown_values_verbatim() {
        let status = ReportStatus::from("ESCALATED");
        assert_eq!(status, ReportStatus::Other("ESCALATED".to_string()));
        assert_eq!(status.as_str(), "ESCALATED");
        // Matching is exact, lowercase is not RESOLVED
        assert!(!ReportStatus::from("resolved").is_resolved());
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_value(ReportStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!("IN_PROGRESS"));
        let back: ReportStatus = serde_json::from_value(serde_json::json!("ON_HOLD")).unwrap();
        assert_eq!(back, ReportStatus::Other("ON_HOLD".to_string()));
    }

    #[test]
    fn test_resolving_stamps_resolved_at_and_updated_at() {
        let mut report = sample_report("r1", "Pothole");
        let now = report.created_at + Duration::hours(3);

        report.apply_status_update(
            &StatusUpdate {
                status: ReportStatus::Resolved,
                resolved_by: Some("crew-7".to_string()),
            },
            now,
        );

        assert_eq!(report.status, ReportStatus::Resolved);
        assert_eq!(report.resolved_at, Some(now));
        assert_eq!(report.updated_at, now);
        assert_eq!(report.resolved_by.as_deref(), Some("crew-7"));
        assert_eq!(report.reopen_count, 0);
    }

    #[test]
    fn test_non_resolved_update_leaves_resolved_at_unset() {
        let mut report = sample_report("r1", "Pothole");
        let now = report.created_at + Duration::minutes(5);

        report.apply_status_update(
            &StatusUpdate {
                status: ReportStatus::InProgress,
                resolved_by: None,
            },
            now,
        );

        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(report.resolved_at, None);
        assert_eq!(report.updated_at, now);
    }

    #[test]
    fn test_reopen_increments_counter_and_keeps_resolution_time() {
        let mut report = sample_report("r1", "Pothole");
        let resolved_time = report.created_at + Duration::hours(1);
        let reopen_time = report.created_at + Duration::hours(2);

        report.apply_status_update(
            &StatusUpdate {
                status: ReportStatus::Resolved,
                resolved_by: Some("crew-7".to_string()),
            },
            resolved_time,
        );
        report.apply_status_update(
            &StatusUpdate {
                status: ReportStatus::InProgress,
                resolved_by: None,
            },
            reopen_time,
        );

        assert_eq!(report.reopen_count, 1);
        assert_eq!(report.resolved_at, Some(resolved_time));
        assert_eq!(report.resolved_by, None);

        // Resolving twice in a row is not a reopen
        report.apply_status_update(
            &StatusUpdate {
                status: ReportStatus::Resolved,
                resolved_by: None,
            },
            reopen_time,
        );
        report.apply_status_update(
            &StatusUpdate {
                status: ReportStatus::Resolved,
                resolved_by: None,
            },
            reopen_time,
        );
        assert_eq!(report.reopen_count, 1);
    }
}
