use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetExpenseRepositoryImpl;

impl PetExpenseRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &PetExpenseRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM pet_expenses WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
