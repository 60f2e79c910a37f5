use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::vaccine::{VaccineModel, VaccineWithPetModel};
use petshop_core_db::repository::{RepositoryError, VaccineRepository};

use crate::utils::{get_heapless_string, TryFromRow};

pub struct VaccineRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl VaccineRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for VaccineModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(VaccineModel {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            vaccine_name: get_heapless_string::<100>(row, "vaccine_name")?,
            expiry_date: row.try_get("expiry_date")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for VaccineWithPetModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(VaccineWithPetModel {
            vaccine: VaccineModel::try_from_row(row)?,
            pet_name: get_heapless_string::<100>(row, "pet_name")?,
        })
    }
}

#[async_trait]
impl VaccineRepository for VaccineRepositoryImpl {
    async fn create(&self, vaccine: VaccineModel) -> Result<VaccineModel, RepositoryError> {
        Self::create_impl(self, vaccine).await
    }

    async fn find_by_pet_id(
        &self,
        pet_id: Uuid,
    ) -> Result<Vec<VaccineModel>, RepositoryError> {
        Self::find_by_pet_id_impl(self, pet_id).await
    }

    async fn find_expiring_before(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<VaccineWithPetModel>, RepositoryError> {
        Self::find_expiring_before_impl(self, cutoff).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
