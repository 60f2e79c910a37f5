use petshop_core_db::models::pet::PetModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetRepositoryImpl;

impl PetRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &PetRepositoryImpl,
        pet: PetModel,
    ) -> Result<PetModel, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE pets
            SET name = $2, breed = $3, birth_date = $4, sex = $5, size = $6,
                health_notes = $7, behavior_notes = $8, photo_url = $9, updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(pet.id)
        .bind(pet.name.as_str())
        .bind(pet.breed.as_deref())
        .bind(pet.birth_date)
        .bind(pet.sex.as_deref())
        .bind(pet.size.as_deref())
        .bind(pet.health_notes.as_deref())
        .bind(pet.behavior_notes.as_deref())
        .bind(pet.photo_url.as_deref())
        .bind(pet.updated_at)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(format!("pet {} not found", pet.id).into());
        }
        Ok(pet)
    }
}
