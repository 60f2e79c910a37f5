use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::pet_expense::PetExpenseModel;
use petshop_core_db::repository::{PetExpenseRepository, RepositoryError};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct PetExpenseRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl PetExpenseRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for PetExpenseModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PetExpenseModel {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            amount: row.try_get("amount")?,
            description: get_heapless_string::<200>(row, "description")?,
            expense_date: row.try_get("expense_date")?,
            category: get_optional_heapless_string::<50>(row, "category")?,
            image_url: get_optional_heapless_string::<300>(row, "image_url")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl PetExpenseRepository for PetExpenseRepositoryImpl {
    async fn create(
        &self,
        expense: PetExpenseModel,
    ) -> Result<PetExpenseModel, RepositoryError> {
        Self::create_impl(self, expense).await
    }

    async fn list_all(&self) -> Result<Vec<PetExpenseModel>, RepositoryError> {
        Self::list_all_impl(self).await
    }

    async fn update(
        &self,
        expense: PetExpenseModel,
    ) -> Result<PetExpenseModel, RepositoryError> {
        Self::update_impl(self, expense).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
