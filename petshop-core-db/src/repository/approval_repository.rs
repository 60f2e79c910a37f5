use async_trait::async_trait;
use uuid::Uuid;

use crate::models::access::approval_history::ApprovalHistoryModel;
use crate::models::access::user_role::UserRoleModel;
use crate::repository::RepositoryError;

/// Transactional operations of the approval workflow
///
/// Both operations are atomic: either every write lands or none does.
/// For rejection the history row is written before the profile row is
/// deleted, so the audit snapshot is taken while the subject still
/// exists.
#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    /// Insert the role assignment and its history record as one unit
    async fn approve(
        &self,
        role: UserRoleModel,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError>;

    /// Append the history record, then delete the profile, as one unit
    async fn reject(
        &self,
        profile_id: Uuid,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError>;
}
