use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use petshop_core_db::models::access::user_role::UserRole;
use petshop_core_db::models::appointment::AppointmentWithPetModel;
use petshop_core_db::models::client::ClientModel;
use petshop_core_db::models::transaction::{PaymentStatus, TransactionModel};

/// A profile awaiting an approval decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// A profile with its current role assignment, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRole {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Option<UserRole>,
    /// The assignment row id, needed to change or revoke the role
    pub role_id: Option<Uuid>,
}

/// Derived standing of one transaction at a point in time
///
/// Only Pendente/Pago are stored; Atrasado is Pendente past its charge
/// date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStanding {
    Pago,
    Pendente,
    Atrasado,
}

impl PaymentStanding {
    pub fn classify(transaction: &TransactionModel, today: NaiveDate) -> Self {
        match transaction.payment_status {
            PaymentStatus::Pago => PaymentStanding::Pago,
            PaymentStatus::Pendente if transaction.is_late(today) => PaymentStanding::Atrasado,
            PaymentStatus::Pendente => PaymentStanding::Pendente,
        }
    }
}

/// Per-client billing rollup for the financial screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientBilling {
    pub client: ClientModel,
    pub transactions: Vec<TransactionModel>,
    /// Sum of all Pendente amounts (late ones included)
    pub pending_total: Decimal,
    /// Number of Pendente transactions past their charge date
    pub late_count: usize,
}

impl ClientBilling {
    /// "Em dia" when nothing is pending, "Pendente" otherwise
    pub fn status_label(&self) -> &'static str {
        if self.has_pending() {
            "Pendente"
        } else {
            "Em dia"
        }
    }

    pub fn has_pending(&self) -> bool {
        self.transactions
            .iter()
            .any(|t| t.payment_status == PaymentStatus::Pendente)
    }
}

/// Today's operational summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Pets checked in (Presente) today
    pub dogs_present: usize,
    /// The next scheduled check-ins for today, creation order, capped
    pub upcoming_check_ins: Vec<AppointmentWithPetModel>,
}
