use petshop_core_db::models::access::user_role::UserRoleModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::UserRoleRepositoryImpl;
use crate::utils::TryFromRow;

impl UserRoleRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &UserRoleRepositoryImpl,
    ) -> Result<Vec<UserRoleModel>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT * FROM user_roles"#)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(UserRoleModel::try_from_row).collect()
    }
}
