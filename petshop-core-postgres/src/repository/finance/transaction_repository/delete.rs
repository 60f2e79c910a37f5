use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::TransactionRepositoryImpl;

impl TransactionRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &TransactionRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM transactions WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
