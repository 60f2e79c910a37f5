use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &ClientRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM clients WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
