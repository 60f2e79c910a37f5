use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a client (pet owner)
///
/// A client owns zero or more pets and zero or more financial
/// transactions. Clients linked to an authenticated account carry the
/// auth user id in `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientModel {
    pub id: Uuid,

    /// References the auth identity when the client has portal access
    pub user_id: Option<Uuid>,

    pub full_name: HeaplessString<100>,
    pub phone: HeaplessString<30>,
    pub email: Option<HeaplessString<100>>,
    pub address: Option<HeaplessString<200>>,
    pub emergency_contact: Option<HeaplessString<100>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ClientModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Denormalized client row with the number of pets it owns, built by
/// the data-access layer for the client directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientWithPetCountModel {
    pub client: ClientModel,
    pub pet_count: i64,
}

impl Identifiable for ClientWithPetCountModel {
    fn get_id(&self) -> Uuid {
        self.client.id
    }
}
