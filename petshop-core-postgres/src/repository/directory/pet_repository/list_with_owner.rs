use petshop_core_db::models::pet::PetWithOwnerModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetRepositoryImpl;
use crate::utils::TryFromRow;

impl PetRepositoryImpl {
    pub(super) async fn list_with_owner_impl(
        repo: &PetRepositoryImpl,
    ) -> Result<Vec<PetWithOwnerModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT p.*, c.full_name AS owner_name
            FROM pets p
            JOIN clients c ON c.id = p.client_id
            ORDER BY p.name
            "#,
        )
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(PetWithOwnerModel::try_from_row).collect()
    }
}
