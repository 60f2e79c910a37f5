use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::appointment::{AppointmentModel, AppointmentStatus, AppointmentWithPetModel};
use crate::repository::RepositoryError;

/// Repository interface for appointments
///
/// Multi-day bookings arrive as a batch of per-day rows; the batch is
/// inserted as one unit so a failing day leaves no partial booking.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Insert a batch of appointment rows and return the stored rows
    async fn create_batch(
        &self,
        appointments: Vec<AppointmentModel>,
    ) -> Result<Vec<AppointmentModel>, RepositoryError>;

    /// Appointments on a given date joined with pet and owner display
    /// fields, ordered by creation time ascending
    async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError>;

    /// Same as [`find_by_date`](Self::find_by_date) but narrowed to one
    /// status
    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AppointmentStatus,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError>;

    /// Transition `id` from `expected` to `next`
    ///
    /// Returns false when the row is missing or no longer in the
    /// expected status; the caller decides how to report that. The
    /// check and the write are one statement, so concurrent callers
    /// cannot both win.
    async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<bool, RepositoryError>;

    /// Unconditional hard delete
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
