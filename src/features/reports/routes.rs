use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// All routes expect a `Principal` in the request extensions, so the caller
/// must layer the auth middleware on top.
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/reports", get(handlers::list_reports))
        .route("/reports/department", get(handlers::list_department_reports))
        .route("/reports/{id}", get(handlers::get_report))
        .route("/reports/{id}/status", put(handlers::update_report_status))
        .with_state(service)
}
