use async_trait::async_trait;
use uuid::Uuid;

use crate::models::access::user_role::{UserRole, UserRoleModel};
use crate::repository::RepositoryError;

/// Repository interface for role assignments
///
/// user_id is unique: inserting a second role for the same user fails
/// at the database, which is what resolves two admins racing to approve
/// the same profile.
#[async_trait]
pub trait UserRoleRepository: Send + Sync {
    async fn create(&self, role: UserRoleModel) -> Result<UserRoleModel, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<UserRoleModel>, RepositoryError>;

    /// The single role assignment for a user, if any
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserRoleModel>, RepositoryError>;

    /// Change the role on an existing assignment
    async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), RepositoryError>;

    /// Revoke an assignment, returning the user to the pending set
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
