use petshop_core_db::models::access::profile::ProfileModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ProfileRepositoryImpl;
use crate::utils::TryFromRow;

impl ProfileRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &ProfileRepositoryImpl,
    ) -> Result<Vec<ProfileModel>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT * FROM profiles ORDER BY created_at DESC"#)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(ProfileModel::try_from_row).collect()
    }
}
