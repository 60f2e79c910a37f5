use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::access::user_role::{UserRole, UserRoleModel};
use petshop_core_db::repository::{RepositoryError, UserRoleRepository};

use crate::utils::TryFromRow;

pub struct UserRoleRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl UserRoleRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for UserRoleModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(UserRoleModel {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            role: row.try_get("role")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl UserRoleRepository for UserRoleRepositoryImpl {
    async fn create(&self, role: UserRoleModel) -> Result<UserRoleModel, RepositoryError> {
        Self::create_impl(self, role).await
    }

    async fn list_all(&self) -> Result<Vec<UserRoleModel>, RepositoryError> {
        Self::list_all_impl(self).await
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserRoleModel>, RepositoryError> {
        Self::find_by_user_id_impl(self, user_id).await
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), RepositoryError> {
        Self::update_role_impl(self, id, role).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
