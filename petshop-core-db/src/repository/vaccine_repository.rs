use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::vaccine::{VaccineModel, VaccineWithPetModel};
use crate::repository::RepositoryError;

/// Repository interface for vaccine records
#[async_trait]
pub trait VaccineRepository: Send + Sync {
    async fn create(&self, vaccine: VaccineModel) -> Result<VaccineModel, RepositoryError>;

    /// Vaccines for one pet, soonest expiry first
    async fn find_by_pet_id(&self, pet_id: Uuid) -> Result<Vec<VaccineModel>, RepositoryError>;

    /// Vaccines expiring on or before `cutoff`, joined with the pet's
    /// name, soonest expiry first
    async fn find_expiring_before(
        &self,
        cutoff: NaiveDate,
    ) -> Result<Vec<VaccineWithPetModel>, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
