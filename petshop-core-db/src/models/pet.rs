use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a pet
///
/// Belongs to exactly one client. Health and behavior notes are free
/// text; the photo reference is a public object-storage URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetModel {
    pub id: Uuid,

    /// References ClientModel.id
    pub client_id: Uuid,

    pub name: HeaplessString<100>,
    pub breed: Option<HeaplessString<100>>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<HeaplessString<20>>,
    pub size: Option<HeaplessString<20>>,
    pub health_notes: Option<HeaplessString<500>>,
    pub behavior_notes: Option<HeaplessString<500>>,
    pub photo_url: Option<HeaplessString<300>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for PetModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Denormalized pet row with the owner's display name, built by the
/// data-access layer for the pet directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetWithOwnerModel {
    pub pet: PetModel,
    pub owner_name: HeaplessString<100>,
}

impl Identifiable for PetWithOwnerModel {
    fn get_id(&self) -> Uuid {
        self.pet.id
    }
}
