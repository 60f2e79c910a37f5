use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::pet::{PetModel, PetWithOwnerModel};
use petshop_core_db::repository::{PetRepository, RepositoryError};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct PetRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl PetRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for PetModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PetModel {
            id: row.try_get("id")?,
            client_id: row.try_get("client_id")?,
            name: get_heapless_string::<100>(row, "name")?,
            breed: get_optional_heapless_string::<100>(row, "breed")?,
            birth_date: row.try_get("birth_date")?,
            sex: get_optional_heapless_string::<20>(row, "sex")?,
            size: get_optional_heapless_string::<20>(row, "size")?,
            health_notes: get_optional_heapless_string::<500>(row, "health_notes")?,
            behavior_notes: get_optional_heapless_string::<500>(row, "behavior_notes")?,
            photo_url: get_optional_heapless_string::<300>(row, "photo_url")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for PetWithOwnerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PetWithOwnerModel {
            pet: PetModel::try_from_row(row)?,
            owner_name: get_heapless_string::<100>(row, "owner_name")?,
        })
    }
}

#[async_trait]
impl PetRepository for PetRepositoryImpl {
    async fn create(&self, pet: PetModel) -> Result<PetModel, RepositoryError> {
        Self::create_impl(self, pet).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PetModel>, RepositoryError> {
        Self::find_by_id_impl(self, id).await
    }

    async fn list_with_owner(&self) -> Result<Vec<PetWithOwnerModel>, RepositoryError> {
        Self::list_with_owner_impl(self).await
    }

    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<PetModel>, RepositoryError> {
        Self::find_by_client_id_impl(self, client_id).await
    }

    async fn update(&self, pet: PetModel) -> Result<PetModel, RepositoryError> {
        Self::update_impl(self, pet).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
