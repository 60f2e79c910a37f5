use uuid::Uuid;

use petshop_core_db::models::pet::PetModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetRepositoryImpl;
use crate::utils::TryFromRow;

impl PetRepositoryImpl {
    pub(super) async fn find_by_client_id_impl(
        repo: &PetRepositoryImpl,
        client_id: Uuid,
    ) -> Result<Vec<PetModel>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT * FROM pets WHERE client_id = $1 ORDER BY name"#)
            .bind(client_id)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(PetModel::try_from_row).collect()
    }
}
