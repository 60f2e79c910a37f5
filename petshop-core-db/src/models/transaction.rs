use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for the payment status enum
///
/// Only the two stored values exist; "late" is a derived billing
/// classification (Pendente with a past charge date), never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "PascalCase")]
pub enum PaymentStatus {
    /// Awaiting payment
    Pendente,
    /// Paid
    Pago,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pendente => write!(f, "Pendente"),
            PaymentStatus::Pago => write!(f, "Pago"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendente" => Ok(PaymentStatus::Pendente),
            "Pago" => Ok(PaymentStatus::Pago),
            _ => Err(()),
        }
    }
}

/// Database model for a financial transaction (client charge)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionModel {
    pub id: Uuid,

    /// References ClientModel.id
    pub client_id: Uuid,

    pub description: HeaplessString<200>,
    pub amount: Decimal,
    pub charge_date: NaiveDate,
    pub payment_status: PaymentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransactionModel {
    /// A transaction is late when it is still Pendente past its charge
    /// date.
    pub fn is_late(&self, today: NaiveDate) -> bool {
        self.payment_status == PaymentStatus::Pendente && self.charge_date < today
    }
}

impl Identifiable for TransactionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
