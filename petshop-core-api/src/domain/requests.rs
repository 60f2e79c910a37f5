use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use petshop_core_db::models::transaction::PaymentStatus;

/// New client form
///
/// `pet_name` is the inline "first pet" shortcut: when present, one pet
/// row is created referencing the new client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewClientRequest {
    #[validate(length(min = 1, max = 100, message = "full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 30, message = "phone is required"))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub emergency_contact: Option<String>,
    #[validate(length(max = 100))]
    pub pet_name: Option<String>,
}

/// Editable client fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 100, message = "full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 30, message = "phone is required"))]
    pub phone: String,
    #[validate(length(max = 100))]
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPetRequest {
    pub client_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "pet name is required"))]
    pub name: String,
    #[validate(length(max = 100))]
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 20))]
    pub sex: Option<String>,
    #[validate(length(max = 20))]
    pub size: Option<String>,
    #[validate(length(max = 500))]
    pub health_notes: Option<String>,
    #[validate(length(max = 500))]
    pub behavior_notes: Option<String>,
    #[validate(length(max = 300))]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, max = 100, message = "pet name is required"))]
    pub name: String,
    #[validate(length(max = 100))]
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 20))]
    pub sex: Option<String>,
    #[validate(length(max = 20))]
    pub size: Option<String>,
    #[validate(length(max = 500))]
    pub health_notes: Option<String>,
    #[validate(length(max = 500))]
    pub behavior_notes: Option<String>,
}

/// New appointment form
///
/// The required fields are optional here because their absence must be
/// reported as a validation error with zero writes, not a type error.
/// `service_type` arrives as the surface label and is parsed against
/// the stored enum, so labels outside it are rejected up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointmentRequest {
    pub pet_id: Option<Uuid>,
    pub service_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Omitted or equal to `start_date` books a single day; later than
    /// `start_date` books every day of the closed interval.
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewTransactionRequest {
    pub client_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200, message = "description is required"))]
    pub description: String,
    pub amount: Option<Decimal>,
    pub charge_date: Option<NaiveDate>,
    pub payment_status: PaymentStatus,
}

/// Receipt image attached to a new expense
///
/// The file name is bounded here because it becomes part of the stored
/// object name and the row's image URL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReceiptUpload {
    #[validate(length(min = 1, max = 200, message = "receipt file name is required"))]
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewExpenseRequest {
    pub pet_id: Option<Uuid>,
    pub amount: Option<Decimal>,
    #[validate(length(min = 1, max = 200, message = "description is required"))]
    pub description: String,
    pub expense_date: Option<NaiveDate>,
    #[validate(length(max = 50))]
    pub category: Option<String>,
    #[validate(nested)]
    pub receipt: Option<ReceiptUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewVaccineRequest {
    pub pet_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "vaccine name is required"))]
    pub vaccine_name: String,
    pub expiry_date: NaiveDate,
}
