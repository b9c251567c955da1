use serde::{Deserialize, Serialize};

/// Kind of account behind a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Department,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Department => write!(f, "department"),
        }
    }
}

/// Authenticated identity attached to a request after session verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Admin {
        id: i64,
        email: String,
    },
    Department {
        id: i64,
        /// Department name, the routing key
        name: String,
        email: String,
    },
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Principal::Admin { .. } => Role::Admin,
            Principal::Department { .. } => Role::Department,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Principal::Admin { id, .. } | Principal::Department { id, .. } => *id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Admin { email, .. } | Principal::Department { email, .. } => email,
        }
    }

    /// Department name for department principals
    pub fn department_name(&self) -> Option<&str> {
        match self {
            Principal::Admin { .. } => None,
            Principal::Department { name, .. } => Some(name),
        }
    }
}
