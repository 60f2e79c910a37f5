use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::VaccineRepositoryImpl;

impl VaccineRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &VaccineRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM vaccines WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
