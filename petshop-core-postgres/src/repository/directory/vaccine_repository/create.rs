use petshop_core_db::models::vaccine::VaccineModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::VaccineRepositoryImpl;

impl VaccineRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &VaccineRepositoryImpl,
        vaccine: VaccineModel,
    ) -> Result<VaccineModel, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO vaccines (id, pet_id, vaccine_name, expiry_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(vaccine.id)
        .bind(vaccine.pet_id)
        .bind(vaccine.vaccine_name.as_str())
        .bind(vaccine.expiry_date)
        .bind(vaccine.created_at)
        .bind(vaccine.updated_at)
        .execute(&*repo.pool)
        .await?;

        Ok(vaccine)
    }
}
