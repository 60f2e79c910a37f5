use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

use petshop_core_db::models::appointment::{
    AppointmentModel, AppointmentStatus, AppointmentWithPetModel,
};
use petshop_core_db::repository::{AppointmentRepository, RepositoryError};

use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};

pub struct AppointmentRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl AppointmentRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for AppointmentModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AppointmentModel {
            id: row.try_get("id")?,
            pet_id: row.try_get("pet_id")?,
            service_type: row.try_get("service_type")?,
            appointment_date: row.try_get("appointment_date")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFromRow<PgRow> for AppointmentWithPetModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AppointmentWithPetModel {
            appointment: AppointmentModel::try_from_row(row)?,
            pet_name: get_heapless_string::<100>(row, "pet_name")?,
            pet_photo_url: get_optional_heapless_string::<300>(row, "pet_photo_url")?,
            owner_name: get_heapless_string::<100>(row, "owner_name")?,
        })
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryImpl {
    async fn create_batch(
        &self,
        appointments: Vec<AppointmentModel>,
    ) -> Result<Vec<AppointmentModel>, RepositoryError> {
        Self::create_batch_impl(self, appointments).await
    }

    async fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError> {
        Self::find_by_date_impl(self, date, None).await
    }

    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AppointmentStatus,
    ) -> Result<Vec<AppointmentWithPetModel>, RepositoryError> {
        Self::find_by_date_impl(self, date, Some(status)).await
    }

    async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<bool, RepositoryError> {
        Self::update_status_impl(self, id, expected, next).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        Self::delete_impl(self, id).await
    }
}
