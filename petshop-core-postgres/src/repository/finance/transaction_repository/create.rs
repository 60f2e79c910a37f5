use petshop_core_db::models::transaction::TransactionModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::TransactionRepositoryImpl;

impl TransactionRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &TransactionRepositoryImpl,
        transaction: TransactionModel,
    ) -> Result<TransactionModel, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO transactions (id, client_id, description, amount, charge_date, payment_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(transaction.id)
        .bind(transaction.client_id)
        .bind(transaction.description.as_str())
        .bind(transaction.amount)
        .bind(transaction.charge_date)
        .bind(transaction.payment_status)
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .execute(&*repo.pool)
        .await?;

        Ok(transaction)
    }
}
