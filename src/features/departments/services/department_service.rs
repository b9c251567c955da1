use std::sync::Arc;

use crate::core::error::Result;
use crate::features::departments::dtos::DepartmentResponseDto;
use crate::features::departments::repositories::DepartmentRepository;

/// Service for the public department roster
pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(departments: Arc<dyn DepartmentRepository>) -> Self {
        Self { departments }
    }

    /// List every department without credentials
    pub async fn list(&self) -> Result<Vec<DepartmentResponseDto>> {
        let departments = self.departments.list().await?;
        Ok(departments.into_iter().map(DepartmentResponseDto::from).collect())
    }
}
