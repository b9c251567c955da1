//! Access policy for reports.
//!
//! Admins see everything. A department sees a report only when the report's
//! category routes to that department. None of these functions touch storage.

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{Principal, Role};
use crate::features::reports::models::Report;
use crate::features::reports::routing::department_for;

pub fn can_view_report(principal: &Principal, report: &Report) -> bool {
    match principal {
        Principal::Admin { .. } => true,
        Principal::Department { name, .. } => department_for(&report.ai_category) == name,
    }
}

/// Keep the reports `principal` may view, in their original order.
pub fn filter_reports_for_department(principal: &Principal, reports: Vec<Report>) -> Vec<Report> {
    reports
        .into_iter()
        .filter(|report| can_view_report(principal, report))
        .collect()
}

/// Gate for operations restricted to a single role.
pub fn require_role(principal: &Principal, role: Role) -> Result<()> {
    if principal.role() == role {
        return Ok(());
    }

    let message = match role {
        Role::Admin => "Admin access required",
        Role::Department => "Department access required",
    };
    Err(AppError::Forbidden(message.to_string()))
}
