use petshop_core_db::models::client::ClientWithPetCountModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ClientRepositoryImpl;
use crate::utils::TryFromRow;

impl ClientRepositoryImpl {
    pub(super) async fn list_with_pet_counts_impl(
        repo: &ClientRepositoryImpl,
    ) -> Result<Vec<ClientWithPetCountModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT c.*, COUNT(p.id) AS pet_count
            FROM clients c
            LEFT JOIN pets p ON p.client_id = c.id
            GROUP BY c.id
            ORDER BY c.full_name
            "#,
        )
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(ClientWithPetCountModel::try_from_row).collect()
    }
}
