use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a profile
///
/// Mirrors an authenticated identity; `id` equals the auth user id. A
/// profile with no matching user-role row is pending approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileModel {
    pub id: Uuid,
    pub email: HeaplessString<100>,
    pub full_name: HeaplessString<100>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ProfileModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
