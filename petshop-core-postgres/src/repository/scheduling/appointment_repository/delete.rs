use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::AppointmentRepositoryImpl;

impl AppointmentRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &AppointmentRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM appointments WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
