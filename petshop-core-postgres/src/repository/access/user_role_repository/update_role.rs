use uuid::Uuid;

use petshop_core_db::models::access::user_role::UserRole;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::UserRoleRepositoryImpl;

impl UserRoleRepositoryImpl {
    pub(super) async fn update_role_impl(
        repo: &UserRoleRepositoryImpl,
        id: Uuid,
        role: UserRole,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(r#"UPDATE user_roles SET role = $2 WHERE id = $1"#)
            .bind(id)
            .bind(role)
            .execute(&*repo.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(format!("role assignment {id} not found").into());
        }
        Ok(())
    }
}
