use uuid::Uuid;

use petshop_core_db::models::client::ClientModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ClientRepositoryImpl;
use crate::utils::TryFromRow;

impl ClientRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ClientRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<ClientModel>, RepositoryError> {
        let row = sqlx::query(r#"SELECT * FROM clients WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(ClientModel::try_from_row).transpose()
    }
}
