//! Fixtures and in-memory repositories shared by unit and HTTP tests.

use std::sync::Mutex;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::core::config::SessionConfig;
use crate::core::error::Result;
use crate::features::auth::model::Principal;
use crate::features::auth::models::{Admin, NewAdmin};
use crate::features::auth::repositories::AdminRepository;
use crate::features::auth::SessionManager;
use crate::features::departments::models::{Department, NewDepartment};
use crate::features::departments::repositories::DepartmentRepository;
use crate::features::reports::models::{Report, ReportStatus, StatusUpdate};
use crate::features::reports::repositories::ReportRepository;

pub const TEST_SECRET: &str = "test-secret";

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

pub fn sample_report(id: &str, category: &str) -> Report {
    Report {
        id: id.to_string(),
        user_id: "citizen-1".to_string(),
        photo_url: Some(format!("https://img.example.org/{}.jpg", id)),
        latitude: 13.0827,
        longitude: 80.2707,
        locality: "T. Nagar".to_string(),
        description: format!("{} reported near the market", category),
        ai_category: category.to_string(),
        ai_summary: Some(format!("{} issue", category)),
        ai_severity_score: Some(6.5),
        ai_urgency_level: Some("MEDIUM".to_string()),
        status: ReportStatus::Received,
        created_at: fixed_time(),
        updated_at: fixed_time(),
        resolved_by: None,
        resolved_at: None,
        reopen_count: 0,
    }
}

pub fn admin_principal() -> Principal {
    Principal::Admin {
        id: 1,
        email: "admin@gccdemo.in".to_string(),
    }
}

pub fn department_principal(name: &str) -> Principal {
    Principal::Department {
        id: 1,
        name: name.to_string(),
        email: format!("{}@gccdemo.in", name.to_lowercase().replace(' ', "")),
    }
}

pub fn test_session_manager() -> SessionManager {
    SessionManager::new(&SessionConfig {
        secret: TEST_SECRET.to_string(),
        ttl_secs: 24 * 60 * 60,
        leeway_secs: 0,
    })
}

/// Argon2id hash with minimal cost so tests stay fast. Verification reads
/// the parameters back from the PHC string.
pub fn fast_hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: Mutex<Vec<Report>>,
}

impl InMemoryReportRepository {
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Mutex::new(reports),
        }
    }

    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        let mut reports = self.reports.lock().unwrap().clone();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(reports)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Report>> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn update_status(&self, id: &str, update: &StatusUpdate) -> Result<Option<Report>> {
        let mut reports = self.reports.lock().unwrap();
        Ok(reports.iter_mut().find(|r| r.id == id).map(|report| {
            report.apply_status_update(update, Utc::now());
            report.clone()
        }))
    }

    async fn insert_if_absent(&self, report: &Report) -> Result<bool> {
        let mut reports = self.reports.lock().unwrap();
        if reports.iter().any(|r| r.id == report.id) {
            return Ok(false);
        }
        reports.push(report.clone());
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    departments: Mutex<Vec<Department>>,
}

impl InMemoryDepartmentRepository {
    /// Add a department with display name "{name} Department".
    pub fn add(&self, name: &str, email: &str, password: &str) -> Department {
        let mut departments = self.departments.lock().unwrap();
        let department = Department {
            id: departments.len() as i64 + 1,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: fast_hash(password),
            display_name: format!("{} Department", name),
            description: format!("{} issues", name),
            created_at: fixed_time(),
        };
        departments.push(department.clone());
        department
    }

    pub fn count(&self) -> usize {
        self.departments.lock().unwrap().len()
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn list(&self) -> Result<Vec<Department>> {
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Department>> {
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.email == email)
            .cloned())
    }

    async fn insert_if_absent(&self, department: &NewDepartment) -> Result<bool> {
        let mut departments = self.departments.lock().unwrap();
        if departments.iter().any(|d| d.email == department.email) {
            return Ok(false);
        }
        let id = departments.len() as i64 + 1;
        departments.push(Department {
            id,
            name: department.name.clone(),
            email: department.email.clone(),
            password_hash: department.password_hash.clone(),
            display_name: department.display_name.clone(),
            description: department.description.clone(),
            created_at: Utc::now(),
        });
        Ok(true)
    }
}

#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: Mutex<Vec<Admin>>,
}

impl InMemoryAdminRepository {
    pub fn add(&self, email: &str, password: &str) -> Admin {
        let mut admins = self.admins.lock().unwrap();
        let admin = Admin {
            id: admins.len() as i64 + 1,
            email: email.to_string(),
            password_hash: fast_hash(password),
            created_at: fixed_time(),
        };
        admins.push(admin.clone());
        admin
    }

    pub fn count(&self) -> usize {
        self.admins.lock().unwrap().len()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn insert_if_absent(&self, admin: &NewAdmin) -> Result<bool> {
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.email == admin.email) {
            return Ok(false);
        }
        let id = admins.len() as i64 + 1;
        admins.push(Admin {
            id,
            email: admin.email.clone(),
            password_hash: admin.password_hash.clone(),
            created_at: Utc::now(),
        });
        Ok(true)
    }
}
