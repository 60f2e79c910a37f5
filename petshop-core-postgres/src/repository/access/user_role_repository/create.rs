use petshop_core_db::models::access::user_role::UserRoleModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::UserRoleRepositoryImpl;

impl UserRoleRepositoryImpl {
    /// A second assignment for the same user fails on the user_id
    /// unique constraint.
    pub(super) async fn create_impl(
        repo: &UserRoleRepositoryImpl,
        role: UserRoleModel,
    ) -> Result<UserRoleModel, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO user_roles (id, user_id, role, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(role.id)
        .bind(role.user_id)
        .bind(role.role)
        .bind(role.created_at)
        .execute(&*repo.pool)
        .await?;

        Ok(role)
    }
}
