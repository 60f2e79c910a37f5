use uuid::Uuid;

use petshop_core_db::models::transaction::TransactionModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::TransactionRepositoryImpl;
use crate::utils::TryFromRow;

impl TransactionRepositoryImpl {
    pub(super) async fn find_by_client_id_impl(
        repo: &TransactionRepositoryImpl,
        client_id: Uuid,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT * FROM transactions WHERE client_id = $1 ORDER BY charge_date DESC"#,
        )
        .bind(client_id)
        .fetch_all(&*repo.pool)
        .await?;

        rows.iter().map(TransactionModel::try_from_row).collect()
    }
}
