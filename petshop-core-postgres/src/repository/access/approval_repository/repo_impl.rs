use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;
use petshop_core_db::models::access::user_role::UserRoleModel;
use petshop_core_db::repository::{ApprovalRepository, RepositoryError};

/// Transactional approval decisions
///
/// This is the one place where writes to user_roles, approval_history
/// and profiles must land together, so it owns its transactions rather
/// than composing the single-table repositories.
pub struct ApprovalRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ApprovalRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApprovalRepository for ApprovalRepositoryImpl {
    async fn approve(
        &self,
        role: UserRoleModel,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError> {
        Self::approve_impl(self, role, history).await
    }

    async fn reject(
        &self,
        profile_id: Uuid,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError> {
        Self::reject_impl(self, profile_id, history).await
    }
}
