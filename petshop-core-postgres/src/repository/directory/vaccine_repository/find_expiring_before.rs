use chrono::NaiveDate;

use petshop_core_db::models::vaccine::VaccineWithPetModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::VaccineRepositoryImpl;
use crate::utils::TryFromRow;

impl VaccineRepositoryImpl {
    pub(super) async fn find_expiring_before_impl(
        repo: &VaccineRepositoryImpl,
        cutoff: NaiveDate,
    ) -> Result<Vec<VaccineWithPetModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT v.*, p.name AS pet_name
            FROM vaccines v
            JOIN pets p ON p.id = v.pet_id
            WHERE v.expiry_date <= $1
            ORDER BY v.expiry_date
            "#,
        )
        .bind(cutoff)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(VaccineWithPetModel::try_from_row).collect()
    }
}
