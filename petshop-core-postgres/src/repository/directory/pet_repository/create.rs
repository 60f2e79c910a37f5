use petshop_core_db::models::pet::PetModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::PetRepositoryImpl;

impl PetRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &PetRepositoryImpl,
        pet: PetModel,
    ) -> Result<PetModel, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO pets (id, client_id, name, breed, birth_date, sex, size,
                              health_notes, behavior_notes, photo_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(pet.id)
        .bind(pet.client_id)
        .bind(pet.name.as_str())
        .bind(pet.breed.as_deref())
        .bind(pet.birth_date)
        .bind(pet.sex.as_deref())
        .bind(pet.size.as_deref())
        .bind(pet.health_notes.as_deref())
        .bind(pet.behavior_notes.as_deref())
        .bind(pet.photo_url.as_deref())
        .bind(pet.created_at)
        .bind(pet.updated_at)
        .execute(&*repo.pool)
        .await?;

        Ok(pet)
    }
}
