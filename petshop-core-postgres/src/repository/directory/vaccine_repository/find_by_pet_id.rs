use uuid::Uuid;

use petshop_core_db::models::vaccine::VaccineModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::VaccineRepositoryImpl;
use crate::utils::TryFromRow;

impl VaccineRepositoryImpl {
    pub(super) async fn find_by_pet_id_impl(
        repo: &VaccineRepositoryImpl,
        pet_id: Uuid,
    ) -> Result<Vec<VaccineModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT * FROM vaccines WHERE pet_id = $1 ORDER BY expiry_date"#,
        )
        .bind(pet_id)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(VaccineModel::try_from_row).collect()
    }
}
