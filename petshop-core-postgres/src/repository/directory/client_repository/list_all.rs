use petshop_core_db::models::client::ClientModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ClientRepositoryImpl;
use crate::utils::TryFromRow;

impl ClientRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &ClientRepositoryImpl,
    ) -> Result<Vec<ClientModel>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT * FROM clients ORDER BY full_name"#)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(ClientModel::try_from_row).collect()
    }
}
