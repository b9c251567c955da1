//! Startup seeding of the department roster, the demo admin and sample reports.
//!
//! Every step is insert-if-absent: departments and admins are keyed by email,
//! reports by id. Existing rows are never overwritten, so restarting the
//! service keeps status changes made through the API.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::config::SeedConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::NewAdmin;
use crate::features::auth::password::hash_password_blocking;
use crate::features::auth::repositories::AdminRepository;
use crate::features::departments::models::NewDepartment;
use crate::features::departments::repositories::DepartmentRepository;
use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;

pub struct DepartmentSeed {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
}

pub const DEPARTMENT_SEEDS: &[DepartmentSeed] = &[
    DepartmentSeed {
        name: "Roads",
        email: "roads@gccdemo.in",
        password: "Roads2024!",
        display_name: "Roads Department",
        description: "Road maintenance, potholes, and infrastructure",
    },
    DepartmentSeed {
        name: "Waste Management",
        email: "waste@gccdemo.in",
        password: "Waste2024!",
        display_name: "Waste Management Department",
        description: "Garbage collection, waste disposal, and sanitation",
    },
    DepartmentSeed {
        name: "Infrastructure",
        email: "infrastructure@gccdemo.in",
        password: "Infra2024!",
        display_name: "Infrastructure Department",
        description: "Public infrastructure maintenance and development",
    },
    DepartmentSeed {
        name: "Street Lighting",
        email: "lighting@gccdemo.in",
        password: "Light2024!",
        display_name: "Street Lighting Department",
        description: "Street lights, public lighting, and electrical infrastructure",
    },
    DepartmentSeed {
        name: "Water and Sewage",
        email: "water@gccdemo.in",
        password: "Water2024!",
        display_name: "Water and Sewage Department",
        description: "Water supply, sewage systems, and drainage",
    },
    DepartmentSeed {
        name: "Enforcement",
        email: "enforcement@gccdemo.in",
        password: "Enforce2024!",
        display_name: "Enforcement Department",
        description: "Political issues, vandalism, and law enforcement",
    },
    DepartmentSeed {
        name: "Public Health & Sanitation",
        email: "health@gccdemo.in",
        password: "Health2024!",
        display_name: "Public Health & Sanitation Department",
        description: "Public health, sanitation, and hygiene",
    },
    DepartmentSeed {
        name: "Parks & Green Spaces",
        email: "parks@gccdemo.in",
        password: "Parks2024!",
        display_name: "Parks & Green Spaces Department",
        description: "Parks, gardens, and green space maintenance",
    },
    DepartmentSeed {
        name: "Planning",
        email: "planning@gccdemo.in",
        password: "Plan2024!",
        display_name: "Planning Department",
        description: "Encroachments, illegal constructions, and urban planning",
    },
    DepartmentSeed {
        name: "Environmental",
        email: "pollution@gccdemo.in",
        password: "Pollute2024!",
        display_name: "Environmental Department",
        description: "Noise control, air pollution, and environmental issues",
    },
    DepartmentSeed {
        name: "Drainage",
        email: "drainage@gccdemo.in",
        password: "Drain2024!",
        display_name: "Drainage Department",
        description: "Flooding, drainage systems, and water management",
    },
    DepartmentSeed {
        name: "Traffic",
        email: "traffic@gccdemo.in",
        password: "Traffic2024!",
        display_name: "Traffic Department",
        description: "Traffic management, parking, and road safety",
    },
    DepartmentSeed {
        name: "Electricity",
        email: "electricity@gccdemo.in",
        password: "Power2024!",
        display_name: "Electricity Department",
        description: "Power supply, electrical infrastructure, and outages",
    },
    DepartmentSeed {
        name: "Public Transport",
        email: "transport@gccdemo.in",
        password: "Transport2024!",
        display_name: "Public Transport Department",
        description: "Public transport, bus stops, and transit infrastructure",
    },
    DepartmentSeed {
        name: "Water Quality",
        email: "drinkingwater@gccdemo.in",
        password: "Drink2024!",
        display_name: "Water Quality Department",
        description: "Drinking water quality, testing, and supply",
    },
];

pub const DEMO_ADMIN_EMAIL: &str = "admin@gccdemo.in";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";

/// Report entry as written in the sample JSON file
#[derive(Debug, Deserialize)]
struct SeedReport {
    id: String,
    user_id: String,
    #[serde(default)]
    photo_url: Option<String>,
    latitude: f64,
    longitude: f64,
    locality: String,
    description: String,
    ai_category: String,
    #[serde(default)]
    ai_summary: Option<String>,
    #[serde(default)]
    ai_severity_score: Option<f64>,
    #[serde(default)]
    ai_urgency_level: Option<String>,
    #[serde(default)]
    status: ReportStatus,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    resolved_by: Option<String>,
    #[serde(default)]
    resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    reopen_count: i32,
}

impl From<SeedReport> for Report {
    fn from(s: SeedReport) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            photo_url: s.photo_url,
            latitude: s.latitude,
            longitude: s.longitude,
            locality: s.locality,
            description: s.description,
            ai_category: s.ai_category,
            ai_summary: s.ai_summary,
            ai_severity_score: s.ai_severity_score,
            ai_urgency_level: s.ai_urgency_level,
            status: s.status,
            updated_at: s.updated_at.unwrap_or(s.created_at),
            created_at: s.created_at,
            resolved_by: s.resolved_by,
            resolved_at: s.resolved_at,
            reopen_count: s.reopen_count.max(0),
        }
    }
}

/// Parse a JSON array of sample reports.
pub fn parse_sample_reports(json: &str) -> Result<Vec<Report>> {
    let reports: Vec<SeedReport> = serde_json::from_str(json)
        .map_err(|e| AppError::Internal(format!("Invalid sample reports file: {}", e)))?;
    Ok(reports.into_iter().map(Report::from).collect())
}

pub async fn load_sample_reports(path: &Path) -> Result<Vec<Report>> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Internal(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_sample_reports(&json)
}

/// Rows written by one seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub admins: usize,
    pub reports: usize,
}

pub struct Seeder {
    departments: Arc<dyn DepartmentRepository>,
    admins: Arc<dyn AdminRepository>,
    reports: Arc<dyn ReportRepository>,
}

impl Seeder {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        admins: Arc<dyn AdminRepository>,
        reports: Arc<dyn ReportRepository>,
    ) -> Self {
        Self {
            departments,
            admins,
            reports,
        }
    }

    /// Seed the full roster, the demo admin and the sample reports file.
    ///
    /// A missing or malformed reports file only logs a warning.
    pub async fn run(&self, config: &SeedConfig) -> Result<SeedSummary> {
        let departments = self.seed_departments(DEPARTMENT_SEEDS).await?;
        let admins = usize::from(self.seed_admin(DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD).await?);

        let reports = match load_sample_reports(&config.reports_path).await {
            Ok(reports) => self.seed_reports(&reports).await?,
            Err(e) => {
                tracing::warn!("Skipping sample reports: {}", e);
                0
            }
        };

        let summary = SeedSummary {
            departments,
            admins,
            reports,
        };
        tracing::info!(
            "Seeding finished: {} departments, {} admins, {} reports inserted",
            summary.departments,
            summary.admins,
            summary.reports
        );
        Ok(summary)
    }

    pub async fn seed_departments(&self, seeds: &[DepartmentSeed]) -> Result<usize> {
        let mut inserted = 0;
        for seed in seeds {
            if self.departments.find_by_email(seed.email).await?.is_some() {
                continue;
            }

            let department = NewDepartment {
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                password_hash: hash_password_blocking(seed.password.to_string()).await?,
                display_name: seed.display_name.to_string(),
                description: seed.description.to_string(),
            };
            if self.departments.insert_if_absent(&department).await? {
                tracing::debug!("Seeded department {}", seed.name);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    pub async fn seed_admin(&self, email: &str, password: &str) -> Result<bool> {
        if self.admins.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        let admin = NewAdmin {
            email: email.to_string(),
            password_hash: hash_password_blocking(password.to_string()).await?,
        };
        self.admins.insert_if_absent(&admin).await
    }

    pub async fn seed_reports(&self, reports: &[Report]) -> Result<usize> {
        let mut inserted = 0;
        for report in reports {
            if self.reports.insert_if_absent(report).await? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
