use std::sync::Arc;

use chrono::NaiveDate;

use petshop_core_db::models::appointment::AppointmentStatus;
use petshop_core_db::repository::AppointmentRepository;

use crate::domain::DashboardSummary;
use crate::error::ApiResult;

const UPCOMING_CAP: usize = 5;

/// Today's operational summary for the landing screen
pub struct DashboardService {
    appointments: Arc<dyn AppointmentRepository>,
}

impl DashboardService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }

    /// Pets currently checked in plus the next scheduled arrivals
    pub async fn today_summary(&self, today: NaiveDate) -> ApiResult<DashboardSummary> {
        let present = self
            .appointments
            .find_by_date_and_status(today, AppointmentStatus::Presente)
            .await?;
        let mut upcoming = self
            .appointments
            .find_by_date_and_status(today, AppointmentStatus::Agendado)
            .await?;
        upcoming.truncate(UPCOMING_CAP);

        Ok(DashboardSummary {
            dogs_present: present.len(),
            upcoming_check_ins: upcoming,
        })
    }
}
