use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::access::profile::ProfileModel;
use petshop_core_db::repository::{ProfileRepository, RepositoryError};

use crate::utils::{get_heapless_string, TryFromRow};

pub struct ProfileRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ProfileRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ProfileModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ProfileModel {
            id: row.try_get("id")?,
            email: get_heapless_string::<100>(row, "email")?,
            full_name: get_heapless_string::<100>(row, "full_name")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<ProfileModel>, RepositoryError> {
        Self::list_all_impl(self).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileModel>, RepositoryError> {
        Self::find_by_id_impl(self, id).await
    }
}
