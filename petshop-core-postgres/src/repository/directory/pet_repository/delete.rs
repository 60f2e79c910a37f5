use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetRepositoryImpl;

impl PetRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &PetRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM pets WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
