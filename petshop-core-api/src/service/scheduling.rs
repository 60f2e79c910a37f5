use std::str::FromStr;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use petshop_core_db::models::appointment::{
    AppointmentModel, AppointmentStatus, AppointmentWithPetModel, ServiceType,
};
use petshop_core_db::repository::{AppointmentRepository, PetRepository};

use crate::domain::NewAppointmentRequest;
use crate::error::{ApiError, ApiResult};

/// Every day of the closed interval `[start, end]`
///
/// `end == start` yields one day. Callers must reject `end < start`
/// before expanding.
fn expand_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let days = (end - start).num_days();
    (0..=days)
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// Appointment booking and the daily agenda state machine
pub struct SchedulingService {
    appointments: Arc<dyn AppointmentRepository>,
    pets: Arc<dyn PetRepository>,
}

impl SchedulingService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>, pets: Arc<dyn PetRepository>) -> Self {
        Self { appointments, pets }
    }

    /// Book an appointment, expanding a date range into one row per day
    ///
    /// All validation happens before any write: a bad request books
    /// nothing. Every expanded row starts as Agendado.
    pub async fn create_appointments(
        &self,
        request: NewAppointmentRequest,
    ) -> ApiResult<Vec<AppointmentModel>> {
        let pet_id = request
            .pet_id
            .ok_or_else(|| ApiError::ValidationError("pet is required".to_string()))?;
        let label = request
            .service_type
            .ok_or_else(|| ApiError::ValidationError("service type is required".to_string()))?;
        let service_type = ServiceType::from_str(&label)
            .map_err(|_| ApiError::ValidationError(format!("unknown service type: {label}")))?;
        let start = request
            .start_date
            .ok_or_else(|| ApiError::ValidationError("start date is required".to_string()))?;
        let end = request.end_date.unwrap_or(start);
        if end < start {
            return Err(ApiError::ValidationError(
                "end date is before start date".to_string(),
            ));
        }

        if self.pets.find_by_id(pet_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("pet {pet_id}")));
        }

        let now = Utc::now();
        let rows = expand_range(start, end)
            .into_iter()
            .map(|date| AppointmentModel {
                id: Uuid::new_v4(),
                pet_id,
                service_type,
                appointment_date: date,
                status: AppointmentStatus::Agendado,
                created_at: now,
                updated_at: now,
            })
            .collect();

        let created = self.appointments.create_batch(rows).await?;
        tracing::info!(%pet_id, %service_type, days = created.len(), "appointment booked");
        Ok(created)
    }

    /// The agenda for one day, creation order
    pub async fn list_by_date(&self, date: NaiveDate) -> ApiResult<Vec<AppointmentWithPetModel>> {
        Ok(self.appointments.find_by_date(date).await?)
    }

    pub async fn list_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AppointmentStatus,
    ) -> ApiResult<Vec<AppointmentWithPetModel>> {
        Ok(self.appointments.find_by_date_and_status(date, status).await?)
    }

    /// Mark a scheduled appointment as arrived
    ///
    /// Errors when the appointment is missing or already past Agendado,
    /// so a double check-in is reported rather than silently absorbed.
    pub async fn check_in(&self, id: Uuid) -> ApiResult<()> {
        self.transition(id, AppointmentStatus::Agendado, AppointmentStatus::Presente)
            .await
    }

    /// Close out a checked-in appointment
    pub async fn finish(&self, id: Uuid) -> ApiResult<()> {
        self.transition(id, AppointmentStatus::Presente, AppointmentStatus::Finalizado)
            .await
    }

    /// Cancel an appointment that has not been checked in
    pub async fn cancel(&self, id: Uuid) -> ApiResult<()> {
        self.transition(id, AppointmentStatus::Agendado, AppointmentStatus::Cancelado)
            .await
    }

    async fn transition(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        next: AppointmentStatus,
    ) -> ApiResult<()> {
        // The state machine is also encoded in the model; guard here so
        // a future caller cannot request an invalid pair
        if !expected.can_transition_to(next) {
            return Err(ApiError::InternalError(format!(
                "invalid transition {expected} -> {next}"
            )));
        }
        let moved = self.appointments.update_status(id, expected, next).await?;
        if !moved {
            return Err(ApiError::ValidationError(format!(
                "appointment {id} is not {expected}"
            )));
        }
        tracing::info!(appointment_id = %id, from = %expected, to = %next, "appointment transitioned");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        Ok(self.appointments.delete(id).await?)
    }
}
