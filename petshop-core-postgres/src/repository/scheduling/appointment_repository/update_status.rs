use uuid::Uuid;

use petshop_core_db::models::appointment::AppointmentStatus;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::AppointmentRepositoryImpl;

impl AppointmentRepositoryImpl {
    /// The status check is part of the UPDATE's WHERE clause, so two
    /// racing transitions cannot both report success.
    pub(super) async fn update_status_impl(
        repo: &AppointmentRepositoryImpl,
        id: Uuid,
        expected: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET status = $3, updated_at = now()
            WHERE id = $1 AND status = $2
            "#,
        )
        .bind(id)
        .bind(expected)
        .bind(next)
        .execute(&*repo.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
