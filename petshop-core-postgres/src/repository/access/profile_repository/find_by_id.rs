use uuid::Uuid;

use petshop_core_db::models::access::profile::ProfileModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ProfileRepositoryImpl;
use crate::utils::TryFromRow;

impl ProfileRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ProfileRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<ProfileModel>, RepositoryError> {
        let row = sqlx::query(r#"SELECT * FROM profiles WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(ProfileModel::try_from_row).transpose()
    }
}
