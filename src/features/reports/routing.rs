//! Category routing: which department is responsible for a report.
//!
//! The AI pipeline assigns each report a free-form category string. Routing
//! is an exact, case-sensitive table lookup with a single fallback, so the
//! department listing and the per-report access check always agree.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Department that receives every category missing from the table
pub const DEFAULT_DEPARTMENT: &str = "Infrastructure";

/// Category to department table
pub const CATEGORY_ROUTES: &[(&str, &str)] = &[
    ("Pothole", "Roads"),
    ("Lighting", "Street Lighting"),
    ("Obstruction", "Infrastructure"),
    ("Sanitation", "Waste Management"),
    ("Safety", "Infrastructure"),
    ("Water", "Water and Sewage"),
    ("Infrastructure", "Infrastructure"),
    ("Vandalism", "Enforcement"),
    ("Traffic", "Traffic"),
    ("Parks", "Parks & Green Spaces"),
    ("Planning", "Planning"),
    ("Noise", "Environmental"),
    ("Drainage", "Drainage"),
    ("Electricity", "Electricity"),
    ("Transport", "Public Transport"),
    ("Water Quality", "Water Quality"),
    ("Health", "Public Health & Sanitation"),
];

lazy_static! {
    static ref ROUTES: HashMap<&'static str, &'static str> =
        CATEGORY_ROUTES.iter().copied().collect();
}

/// Department responsible for `category`. Never fails.
pub fn department_for(category: &str) -> &'static str {
    ROUTES.get(category).copied().unwrap_or(DEFAULT_DEPARTMENT)
}
