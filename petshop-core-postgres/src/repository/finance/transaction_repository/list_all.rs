use petshop_core_db::models::transaction::TransactionModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::TransactionRepositoryImpl;
use crate::utils::TryFromRow;

impl TransactionRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &TransactionRepositoryImpl,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let rows = sqlx::query(r#"SELECT * FROM transactions ORDER BY charge_date DESC"#)
            .fetch_all(&*repo.pool)
            .await?;

        rows.iter().map(TransactionModel::try_from_row).collect()
    }
}
