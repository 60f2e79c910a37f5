use petshop_core_db::models::appointment::AppointmentModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::AppointmentRepositoryImpl;

impl AppointmentRepositoryImpl {
    /// Inserts all rows in one transaction: a failing day rolls back
    /// the whole booking.
    pub(super) async fn create_batch_impl(
        repo: &AppointmentRepositoryImpl,
        appointments: Vec<AppointmentModel>,
    ) -> Result<Vec<AppointmentModel>, RepositoryError> {
        if appointments.is_empty() {
            return Ok(appointments);
        }

        let mut tx = repo.pool.begin().await?;
        for appointment in &appointments {
            sqlx::query(
                r#"
                INSERT INTO appointments (id, pet_id, service_type, appointment_date, status, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(appointment.id)
            .bind(appointment.pet_id)
            .bind(appointment.service_type)
            .bind(appointment.appointment_date)
            .bind(appointment.status)
            .bind(appointment.created_at)
            .bind(appointment.updated_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(appointments)
    }
}
