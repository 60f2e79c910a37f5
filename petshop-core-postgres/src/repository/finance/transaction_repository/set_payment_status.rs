use uuid::Uuid;

use petshop_core_db::models::transaction::PaymentStatus;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::TransactionRepositoryImpl;

impl TransactionRepositoryImpl {
    pub(super) async fn set_payment_status_impl(
        repo: &TransactionRepositoryImpl,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE transactions SET payment_status = $2, updated_at = now() WHERE id = $1"#,
        )
        .bind(id)
        .bind(status)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(format!("transaction {id} not found").into());
        }
        Ok(())
    }
}
