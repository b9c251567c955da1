/// Scheme prefix expected in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// ERROR MESSAGES
// =============================================================================

/// Returned for both unknown accounts and wrong passwords so logins cannot
/// be used to probe which emails exist.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub const CREDENTIALS_REQUIRED: &str = "Email and password required";

pub const ACCESS_TOKEN_REQUIRED: &str = "Access token required";

pub const REPORT_NOT_FOUND: &str = "Report not found";

pub const ACCESS_DENIED: &str = "Access denied";

pub const STATUS_REQUIRED: &str = "Status is required";
