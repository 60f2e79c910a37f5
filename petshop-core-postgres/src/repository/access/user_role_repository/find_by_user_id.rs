use uuid::Uuid;

use petshop_core_db::models::access::user_role::UserRoleModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::UserRoleRepositoryImpl;
use crate::utils::TryFromRow;

impl UserRoleRepositoryImpl {
    pub(super) async fn find_by_user_id_impl(
        repo: &UserRoleRepositoryImpl,
        user_id: Uuid,
    ) -> Result<Option<UserRoleModel>, RepositoryError> {
        let row = sqlx::query(r#"SELECT * FROM user_roles WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(UserRoleModel::try_from_row).transpose()
    }
}
