use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::transaction::{PaymentStatus, TransactionModel};
use petshop_core_db::repository::{RepositoryError, TransactionRepository};

use crate::utils::{get_heapless_string, TryFromRow};

pub struct TransactionRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl TransactionRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for TransactionModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TransactionModel {
            id: row.try_get("id")?,
            client_id: row.try_get("client_id")?,
            description: get_heapless_string::<200>(row, "description")?,
            amount: row.try_get("amount")?,
            charge_date: row.try_get("charge_date")?,
            payment_status: row.try_get("payment_status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl TransactionRepository for TransactionRepositoryImpl {
    async fn create(
        &self,
        transaction: TransactionModel,
    ) -> Result<TransactionModel, RepositoryError> {
        Self::create_impl(self, transaction).await
    }

    async fn list_all(&self) -> Result<Vec<TransactionModel>, RepositoryError> {
        Self::list_all_impl(self).await
    }

    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        Self::find_by_client_id_impl(self, client_id).await
    }

    async fn set_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), RepositoryError> {
        Self::set_payment_status_impl(self, id, status).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
