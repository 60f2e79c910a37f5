use async_trait::async_trait;
use uuid::Uuid;

use crate::models::pet::{PetModel, PetWithOwnerModel};
use crate::repository::RepositoryError;

/// Repository interface for pet records
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn create(&self, pet: PetModel) -> Result<PetModel, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PetModel>, RepositoryError>;

    /// All pets joined with the owner's name, ordered by pet name
    async fn list_with_owner(&self) -> Result<Vec<PetWithOwnerModel>, RepositoryError>;

    /// Pets belonging to one client
    async fn find_by_client_id(&self, client_id: Uuid) -> Result<Vec<PetModel>, RepositoryError>;

    async fn update(&self, pet: PetModel) -> Result<PetModel, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
