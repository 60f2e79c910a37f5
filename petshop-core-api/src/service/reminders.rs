use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use petshop_core_db::models::vaccine::VaccineWithPetModel;
use petshop_core_db::repository::VaccineRepository;

use crate::error::ApiResult;

const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Vaccine expiry reminders
pub struct ReminderService {
    vaccines: Arc<dyn VaccineRepository>,
}

impl ReminderService {
    pub fn new(vaccines: Arc<dyn VaccineRepository>) -> Self {
        Self { vaccines }
    }

    /// Vaccines expiring within `days` of `today`, soonest first
    ///
    /// Already-expired vaccines are included; they need the reminder
    /// most.
    pub async fn expiring_within(
        &self,
        today: NaiveDate,
        days: Option<i64>,
    ) -> ApiResult<Vec<VaccineWithPetModel>> {
        let cutoff = today + Duration::days(days.unwrap_or(DEFAULT_WINDOW_DAYS));
        Ok(self.vaccines.find_expiring_before(cutoff).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::memory::{self, Memory};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seed(memory: &Memory, vaccine_name: &str, expiry: NaiveDate) {
        let owner = memory::client("Ana Lima");
        let pet = memory::pet(owner.id, "Rex");
        memory
            .0
            .vaccines
            .lock()
            .unwrap()
            .push(memory::vaccine(pet.id, vaccine_name, expiry));
        memory.0.clients.lock().unwrap().push(owner);
        memory.0.pets.lock().unwrap().push(pet);
    }

    #[tokio::test]
    async fn window_includes_expired_and_soon_to_expire() {
        let memory = Memory::new();
        let today = date(2024, 3, 10);
        seed(&memory, "V10 vencida", date(2024, 3, 1));
        seed(&memory, "Antirrábica em 20 dias", date(2024, 3, 30));
        seed(&memory, "Gripe em 60 dias", date(2024, 5, 10));

        let due = ReminderService::new(Arc::new(memory))
            .expiring_within(today, None)
            .await
            .unwrap();

        assert_eq!(due.len(), 2);
        assert_eq!(due[0].vaccine.expiry_date, date(2024, 3, 1));
        assert_eq!(due[0].pet_name.as_str(), "Rex");
    }

    #[tokio::test]
    async fn custom_window_narrows_the_listing() {
        let memory = Memory::new();
        let today = date(2024, 3, 10);
        seed(&memory, "Em 5 dias", date(2024, 3, 15));
        seed(&memory, "Em 25 dias", date(2024, 4, 4));

        let due = ReminderService::new(Arc::new(memory))
            .expiring_within(today, Some(7))
            .await
            .unwrap();
        assert_eq!(due.len(), 1);
    }
}
