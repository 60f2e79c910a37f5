use chrono::NaiveDate;

use petshop_core_db::models::appointment::{AppointmentStatus, AppointmentWithPetModel};
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::AppointmentRepositoryImpl;
use crate::utils::TryFromRow;

impl AppointmentRepositoryImpl {
    pub(super) async fn find_by_date_impl(
        repo: &AppointmentRepositoryImpl,
        date: NaiveDate,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT a.*, p.name AS pet_name, p.photo_url AS pet_photo_url,
                   c.full_name AS owner_name
            FROM appointments a
            JOIN pets p ON p.id = a.pet_id
            JOIN clients c ON c.id = p.client_id
            WHERE a.appointment_date = $1
              AND ($2::appointment_status IS NULL OR a.status = $2)
            ORDER BY a.created_at
            "#,
        )
        .bind(date)
        .bind(status)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(AppointmentWithPetModel::try_from_row).collect()
    }
}
