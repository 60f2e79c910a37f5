use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ApprovalHistoryRepositoryImpl;
use crate::repository::access::history_sql::insert_history;

impl ApprovalHistoryRepositoryImpl {
    pub(super) async fn append_impl(
        repo: &ApprovalHistoryRepositoryImpl,
        record: ApprovalHistoryModel,
    ) -> Result<ApprovalHistoryModel, RepositoryError> {
        insert_history(&*repo.pool, &record).await?;
        Ok(record)
    }
}
