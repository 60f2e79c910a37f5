use async_trait::async_trait;
use uuid::Uuid;

use crate::models::access::profile::ProfileModel;
use crate::repository::RepositoryError;

/// Repository interface for profiles
///
/// Profiles are created by the auth provider's signup hook, so there is
/// no create operation here; deletion happens only through rejection.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All profiles, newest first
    async fn list_all(&self) -> Result<Vec<ProfileModel>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileModel>, RepositoryError>;
}
