use petshop_core_db::models::client::ClientModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ClientRepositoryImpl,
        client: ClientModel,
    ) -> Result<ClientModel, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET user_id = $2, full_name = $3, phone = $4, email = $5,
                address = $6, emergency_contact = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(client.id)
        .bind(client.user_id)
        .bind(client.full_name.as_str())
        .bind(client.phone.as_str())
        .bind(client.email.as_deref())
        .bind(client.address.as_deref())
        .bind(client.emergency_contact.as_deref())
        .bind(client.updated_at)
        .execute(&*repo.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(format!("client {} not found", client.id).into());
        }
        Ok(client)
    }
}
