use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use petshop_core_db::models::access::approval_history::{ApprovalAction, ApprovalHistoryModel};
use petshop_core_db::repository::{ApprovalHistoryRepository, RepositoryError};

use crate::utils::{get_heapless_string, TryFromRow};

pub struct ApprovalHistoryRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ApprovalHistoryRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ApprovalHistoryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let action_str: String = row.try_get("action")?;
        let action = ApprovalAction::from_str(&action_str)
            .map_err(|_| format!("unknown approval action '{action_str}'"))?;

        Ok(ApprovalHistoryModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            user_email: get_heapless_string::<100>(row, "user_email")?,
            user_name: get_heapless_string::<100>(row, "user_name")?,
            action,
            assigned_role: row.try_get("assigned_role")?,
            approved_by: row.try_get("approved_by")?,
            approved_by_email: get_heapless_string::<100>(row, "approved_by_email")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl ApprovalHistoryRepository for ApprovalHistoryRepositoryImpl {
    async fn append(
        &self,
        record: ApprovalHistoryModel,
    ) -> Result<ApprovalHistoryModel, RepositoryError> {
        Self::append_impl(self, record).await
    }

    async fn list_recent(
        &self,
        limit: i64,
    ) -> Result<Vec<ApprovalHistoryModel>, RepositoryError> {
        Self::list_recent_impl(self, limit).await
    }
}
