use async_trait::async_trait;

use crate::models::access::approval_history::ApprovalHistoryModel;
use crate::repository::RepositoryError;

/// Repository interface for the approval audit trail
///
/// Append-only; rows are never updated or deleted.
#[async_trait]
pub trait ApprovalHistoryRepository: Send + Sync {
    async fn append(
        &self,
        record: ApprovalHistoryModel,
    ) -> Result<ApprovalHistoryModel, RepositoryError>;

    /// Most recent records first, capped at `limit`
    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<ApprovalHistoryModel>, RepositoryError>;
}
