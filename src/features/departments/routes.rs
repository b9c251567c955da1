use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::departments::handlers;
use crate::features::departments::services::DepartmentService;

/// Create routes for the departments feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<DepartmentService>) -> Router {
    Router::new()
        .route("/departments", get(handlers::list_departments))
        .with_state(service)
}
