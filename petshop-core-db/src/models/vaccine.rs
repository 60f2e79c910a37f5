use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a vaccine record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineModel {
    pub id: Uuid,

    /// References PetModel.id
    pub pet_id: Uuid,

    pub vaccine_name: HeaplessString<100>,
    pub expiry_date: NaiveDate,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for VaccineModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Denormalized vaccine row with the pet's display name, used by the
/// expiry reminders listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineWithPetModel {
    pub vaccine: VaccineModel,
    pub pet_name: HeaplessString<100>,
}

impl Identifiable for VaccineWithPetModel {
    fn get_id(&self) -> Uuid {
        self.vaccine.id
    }
}
