use uuid::Uuid;

use petshop_core_db::repository::RepositoryError;

use super::repo_impl::UserRoleRepositoryImpl;

impl UserRoleRepositoryImpl {
    pub(super) async fn delete_impl(
        repo: &UserRoleRepositoryImpl,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        sqlx::query(r#"DELETE FROM user_roles WHERE id = $1"#)
            .bind(id)
            .execute(&*repo.pool)
            .await?;
        Ok(())
    }
}
