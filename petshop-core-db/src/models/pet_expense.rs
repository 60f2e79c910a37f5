use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for a pet-related expense
///
/// The image URL points at a receipt object in external storage and is
/// set before the row is inserted; the row is never created when the
/// upload fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetExpenseModel {
    pub id: Uuid,

    /// References PetModel.id; general expenses carry no pet
    pub pet_id: Option<Uuid>,

    pub amount: Decimal,
    pub description: HeaplessString<200>,
    pub expense_date: NaiveDate,
    pub category: Option<HeaplessString<50>>,
    pub image_url: Option<HeaplessString<300>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for PetExpenseModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
