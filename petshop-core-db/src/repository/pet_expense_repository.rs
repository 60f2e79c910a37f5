use async_trait::async_trait;
use uuid::Uuid;

use crate::models::pet_expense::PetExpenseModel;
use crate::repository::RepositoryError;

/// Repository interface for pet expenses
#[async_trait]
pub trait PetExpenseRepository: Send + Sync {
    async fn create(&self, expense: PetExpenseModel) -> Result<PetExpenseModel, RepositoryError>;

    /// All expenses, newest expense date first
    async fn list_all(&self) -> Result<Vec<PetExpenseModel>, RepositoryError>;

    async fn update(&self, expense: PetExpenseModel) -> Result<PetExpenseModel, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
