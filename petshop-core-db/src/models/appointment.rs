use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Database model for the service type enum
///
/// Only the stored values are accepted; surface labels outside this set
/// (e.g. grooming combos) are rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "service_type", rename_all = "PascalCase")]
pub enum ServiceType {
    /// Daycare
    Creche,
    /// Overnight boarding
    Hotel,
    /// Bath
    Banho,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Creche => write!(f, "Creche"),
            ServiceType::Hotel => write!(f, "Hotel"),
            ServiceType::Banho => write!(f, "Banho"),
        }
    }
}

impl FromStr for ServiceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Creche" => Ok(ServiceType::Creche),
            "Hotel" => Ok(ServiceType::Hotel),
            "Banho" => Ok(ServiceType::Banho),
            _ => Err(()),
        }
    }
}

/// Database model for the appointment status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "appointment_status", rename_all = "PascalCase")]
pub enum AppointmentStatus {
    /// Scheduled
    Agendado,
    /// Checked in
    Presente,
    /// Finished
    Finalizado,
    /// Cancelled
    Cancelado,
}

impl AppointmentStatus {
    /// Valid transitions: Agendado -> Presente -> Finalizado, and
    /// Agendado -> Cancelado.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Agendado, AppointmentStatus::Presente)
                | (AppointmentStatus::Presente, AppointmentStatus::Finalizado)
                | (AppointmentStatus::Agendado, AppointmentStatus::Cancelado)
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Agendado => write!(f, "Agendado"),
            AppointmentStatus::Presente => write!(f, "Presente"),
            AppointmentStatus::Finalizado => write!(f, "Finalizado"),
            AppointmentStatus::Cancelado => write!(f, "Cancelado"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Agendado" => Ok(AppointmentStatus::Agendado),
            "Presente" => Ok(AppointmentStatus::Presente),
            "Finalizado" => Ok(AppointmentStatus::Finalizado),
            "Cancelado" => Ok(AppointmentStatus::Cancelado),
            _ => Err(()),
        }
    }
}

/// Database model for an appointment
///
/// One row per pet per calendar day. A multi-day booking is expanded
/// into one row per day before it reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentModel {
    pub id: Uuid,

    /// References PetModel.id
    pub pet_id: Uuid,

    pub service_type: ServiceType,
    pub appointment_date: NaiveDate,
    pub status: AppointmentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for AppointmentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Denormalized appointment row joined with pet and owner display
/// fields, built by the data-access layer for the daily agenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentWithPetModel {
    pub appointment: AppointmentModel,
    pub pet_name: HeaplessString<100>,
    pub pet_photo_url: Option<HeaplessString<300>>,
    pub owner_name: HeaplessString<100>,
}

impl Identifiable for AppointmentWithPetModel {
    fn get_id(&self) -> Uuid {
        self.appointment.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_round_trips_stored_values() {
        for value in ["Creche", "Hotel", "Banho"] {
            let parsed = ServiceType::from_str(value).unwrap();
            assert_eq!(parsed.to_string(), value);
        }
    }

    #[test]
    fn service_type_rejects_unstored_surface_labels() {
        assert!(ServiceType::from_str("Tosa").is_err());
        assert!(ServiceType::from_str("Banho e Tosa").is_err());
        assert!(ServiceType::from_str("").is_err());
    }

    #[test]
    fn status_transitions_follow_the_state_machine() {
        use AppointmentStatus::*;

        assert!(Agendado.can_transition_to(Presente));
        assert!(Agendado.can_transition_to(Cancelado));
        assert!(Presente.can_transition_to(Finalizado));

        assert!(!Presente.can_transition_to(Presente));
        assert!(!Presente.can_transition_to(Cancelado));
        assert!(!Finalizado.can_transition_to(Agendado));
        assert!(!Cancelado.can_transition_to(Presente));
    }
}
