use async_trait::async_trait;

use petshop_core_db::repository::RepositoryError;

/// External object storage for expense receipt images
///
/// `store` returns a publicly resolvable URL; that URL is what lands on
/// the expense row. `remove` is the compensation hook used when the row
/// insert fails after a successful upload.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, RepositoryError>;

    async fn remove(&self, url: &str) -> Result<(), RepositoryError>;
}
