use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use petshop_core_db::models::transaction::{PaymentStatus, TransactionModel};
use petshop_core_db::repository::{ClientRepository, TransactionRepository};

use crate::domain::{bounded, ClientBilling, NewTransactionRequest, PaymentStanding};
use crate::error::{ApiError, ApiResult};

/// Client charges and the per-client billing rollup
pub struct BillingService {
    clients: Arc<dyn ClientRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl BillingService {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            clients,
            transactions,
        }
    }

    pub async fn create_transaction(
        &self,
        request: NewTransactionRequest,
    ) -> ApiResult<TransactionModel> {
        request.validate()?;
        let client_id = request
            .client_id
            .ok_or_else(|| ApiError::ValidationError("client is required".to_string()))?;
        let amount = request
            .amount
            .ok_or_else(|| ApiError::ValidationError("amount is required".to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(ApiError::ValidationError(
                "amount must be positive".to_string(),
            ));
        }
        let charge_date = request
            .charge_date
            .ok_or_else(|| ApiError::ValidationError("charge date is required".to_string()))?;
        if self.clients.find_by_id(client_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("client {client_id}")));
        }

        let now = Utc::now();
        let transaction = TransactionModel {
            id: Uuid::new_v4(),
            client_id,
            description: bounded::<200>("description", &request.description)?,
            amount,
            charge_date,
            payment_status: request.payment_status,
            created_at: now,
            updated_at: now,
        };
        Ok(self.transactions.create(transaction).await?)
    }

    /// Per-client rollup for the financial screen
    ///
    /// Every client appears, charges or not. `today` anchors the late
    /// classification so the rollup is reproducible in tests.
    pub async fn overview(&self, today: NaiveDate) -> ApiResult<Vec<ClientBilling>> {
        let clients = self.clients.list_all().await?;
        let mut by_client: HashMap<Uuid, Vec<TransactionModel>> = HashMap::new();
        for transaction in self.transactions.list_all().await? {
            by_client
                .entry(transaction.client_id)
                .or_default()
                .push(transaction);
        }

        Ok(clients
            .into_iter()
            .map(|client| {
                let transactions = by_client.remove(&client.id).unwrap_or_default();
                let pending_total = transactions
                    .iter()
                    .filter(|t| t.payment_status == PaymentStatus::Pendente)
                    .map(|t| t.amount)
                    .sum();
                let late_count = transactions
                    .iter()
                    .filter(|t| PaymentStanding::classify(t, today) == PaymentStanding::Atrasado)
                    .count();
                ClientBilling {
                    client,
                    transactions,
                    pending_total,
                    late_count,
                }
            })
            .collect())
    }

    pub async fn list_for_client(&self, client_id: Uuid) -> ApiResult<Vec<TransactionModel>> {
        Ok(self.transactions.find_by_client_id(client_id).await?)
    }

    pub async fn mark_paid(&self, id: Uuid) -> ApiResult<()> {
        Ok(self
            .transactions
            .set_payment_status(id, PaymentStatus::Pago)
            .await?)
    }

    pub async fn mark_pending(&self, id: Uuid) -> ApiResult<()> {
        Ok(self
            .transactions
            .set_payment_status(id, PaymentStatus::Pendente)
            .await?)
    }

    pub async fn delete_transaction(&self, id: Uuid) -> ApiResult<()> {
        Ok(self.transactions.delete(id).await?)
    }
}
