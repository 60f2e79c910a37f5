use petshop_core_db::models::client::ClientModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ClientRepositoryImpl;

impl ClientRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ClientRepositoryImpl,
        client: ClientModel,
    ) -> Result<ClientModel, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO clients (id, user_id, full_name, phone, email, address, emergency_contact, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(client.id)
        .bind(client.user_id)
        .bind(client.full_name.as_str())
        .bind(client.phone.as_str())
        .bind(client.email.as_deref())
        .bind(client.address.as_deref())
        .bind(client.emergency_contact.as_deref())
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&*repo.pool)
        .await?;

        Ok(client)
    }
}
