//! Shared insert for approval_history rows
//!
//! Used standalone by the history repository and inside the approval
//! transactions, so it is generic over the executor.

use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;

pub(crate) async fn insert_history<'e, E>(
    executor: E,
    record: &ApprovalHistoryModel,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    sqlx::query(
        r#"
        INSERT INTO approval_history (id, user_id, user_email, user_name, action,
                                      assigned_role, approved_by, approved_by_email, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(record.id)
    .bind(record.user_id)
    .bind(record.user_email.as_str())
    .bind(record.user_name.as_str())
    .bind(record.action.to_string())
    .bind(record.assigned_role)
    .bind(record.approved_by)
    .bind(record.approved_by_email.as_str())
    .bind(record.created_at)
    .execute(executor)
    .await?;

    Ok(())
}
