use uuid::Uuid;

use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ApprovalRepositoryImpl;
use crate::repository::access::history_sql::insert_history;

impl ApprovalRepositoryImpl {
    /// History first, then the profile delete; the audit snapshot is
    /// taken while the subject row still exists.
    pub(super) async fn reject_impl(
        repo: &ApprovalRepositoryImpl,
        profile_id: Uuid,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError> {
        let mut tx = repo.pool.begin().await?;

        insert_history(&mut *tx, &history).await?;

        let result = sqlx::query(r#"DELETE FROM profiles WHERE id = $1"#)
            .bind(profile_id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(format!("profile {profile_id} not found").into());
        }

        tx.commit().await?;
        Ok(())
    }
}
