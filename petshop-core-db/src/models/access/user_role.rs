use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for the application role enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "app_role", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Client,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Staff => write!(f, "staff"),
            UserRole::Client => write!(f, "client"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "staff" => Ok(UserRole::Staff),
            "client" => Ok(UserRole::Client),
            _ => Err(()),
        }
    }
}

/// Database model for a role assignment
///
/// At most one row per user id; the unique constraint on user_id makes
/// a racing second approval fail instead of producing a double role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRoleModel {
    pub id: Uuid,

    /// References ProfileModel.id (the auth user id)
    pub user_id: Uuid,

    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for UserRoleModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
