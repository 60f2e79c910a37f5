use async_trait::async_trait;
use uuid::Uuid;

use crate::models::transaction::{PaymentStatus, TransactionModel};
use crate::repository::RepositoryError;

/// Repository interface for client charges
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn create(
        &self,
        transaction: TransactionModel,
    ) -> Result<TransactionModel, RepositoryError>;

    /// All transactions, newest charge date first
    async fn list_all(&self) -> Result<Vec<TransactionModel>, RepositoryError>;

    /// Transactions belonging to one client
    async fn find_by_client_id(
        &self,
        client_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;

    /// Flip the stored payment status of one transaction
    async fn set_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
