use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::access::user_role::UserRole;
use crate::models::identifiable::Identifiable;

/// Outcome recorded for an approval decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalAction {
    Approved,
    Rejected,
}

impl std::fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalAction::Approved => write!(f, "approved"),
            ApprovalAction::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for ApprovalAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ApprovalAction::Approved),
            "rejected" => Ok(ApprovalAction::Rejected),
            _ => Err(()),
        }
    }
}

/// Database model for an approval audit row
///
/// Append-only. Captures a snapshot of the subject's email and name so
/// the record survives a rejected profile's deletion. One row per
/// decision, written in the same transaction as the decision itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalHistoryModel {
    pub id: Uuid,

    /// The subject's auth user id
    pub user_id: Uuid,
    pub user_email: HeaplessString<100>,
    pub user_name: HeaplessString<100>,

    pub action: ApprovalAction,
    /// Present only when action is Approved
    pub assigned_role: Option<UserRole>,

    /// The acting admin
    pub approved_by: Uuid,
    pub approved_by_email: HeaplessString<100>,

    pub created_at: DateTime<Utc>,
}

impl Identifiable for ApprovalHistoryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
