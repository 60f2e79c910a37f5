use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::client::{ClientModel, ClientWithPetCountModel};
use petshop_core_db::repository::{ClientRepository, RepositoryError};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct ClientRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ClientRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ClientModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ClientModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            full_name: get_heapless_string::<100>(row, "full_name")?,
            phone: get_heapless_string::<30>(row, "phone")?,
            email: get_optional_heapless_string::<100>(row, "email")?,
            address: get_optional_heapless_string::<200>(row, "address")?,
            emergency_contact: get_optional_heapless_string::<100>(row, "emergency_contact")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for ClientWithPetCountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ClientWithPetCountModel {
            client: ClientModel::try_from_row(row)?,
            pet_count: row.try_get("pet_count")?,
        })
    }
}

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn create(&self, client: ClientModel) -> Result<ClientModel, RepositoryError> {
        Self::create_impl(self, client).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientModel>, RepositoryError> {
        Self::find_by_id_impl(self, id).await
    }

    async fn list_all(&self) -> Result<Vec<ClientModel>, RepositoryError> {
        Self::list_all_impl(self).await
    }

    async fn list_with_pet_counts(
        &self,
    ) -> Result<Vec<ClientWithPetCountModel>, RepositoryError> {
        Self::list_with_pet_counts_impl(self).await
    }

    async fn update(&self, client: ClientModel) -> Result<ClientModel, RepositoryError> {
        Self::update_impl(self, client).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
