use async_trait::async_trait;
use uuid::Uuid;

use crate::models::client::{ClientModel, ClientWithPetCountModel};
use crate::repository::RepositoryError;

/// Repository interface for client records
///
/// Implementations are expected to order listings by full name so the
/// directory screens can render them without re-sorting.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert one client and return the stored row
    async fn create(&self, client: ClientModel) -> Result<ClientModel, RepositoryError>;

    /// Load a single client by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientModel>, RepositoryError>;

    /// All clients ordered by full name
    async fn list_all(&self) -> Result<Vec<ClientModel>, RepositoryError>;

    /// All clients with their pet counts, ordered by full name
    async fn list_with_pet_counts(&self)
        -> Result<Vec<ClientWithPetCountModel>, RepositoryError>;

    /// Update the mutable fields of a client
    async fn update(&self, client: ClientModel) -> Result<ClientModel, RepositoryError>;

    /// Hard delete
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
