use uuid::Uuid;

use petshop_core_db::models::pet::PetModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetRepositoryImpl;
use crate::utils::TryFromRow;

impl PetRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &PetRepositoryImpl,
        id: Uuid,
    ) -> Result<Option<PetModel>, RepositoryError> {
        let row = sqlx::query(r#"SELECT * FROM pets WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&*repo.pool)
            .await?;

        row.as_ref().map(PetModel::try_from_row).transpose()
    }
}
