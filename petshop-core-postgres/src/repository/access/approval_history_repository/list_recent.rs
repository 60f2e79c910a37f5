use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ApprovalHistoryRepositoryImpl;
use crate::utils::TryFromRow;

impl ApprovalHistoryRepositoryImpl {
    pub(super) async fn list_recent_impl(
        repo: &ApprovalHistoryRepositoryImpl,
        limit: i64,
    ) -> Result<Vec<ApprovalHistoryModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT * FROM approval_history ORDER BY created_at DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(ApprovalHistoryModel::try_from_row).collect()
    }
}
