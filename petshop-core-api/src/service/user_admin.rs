use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use petshop_core_db::models::access::user_role::{UserRole, UserRoleModel};
use petshop_core_db::repository::{ProfileRepository, UserRoleRepository};

use crate::domain::UserWithRole;
use crate::error::{ApiError, ApiResult};

/// Role administration over already-approved users
///
/// Distinct from the approval workflow: these operations change or
/// revoke existing assignments and write no audit history.
pub struct UserAdminService {
    profiles: Arc<dyn ProfileRepository>,
    roles: Arc<dyn UserRoleRepository>,
}

impl UserAdminService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, roles: Arc<dyn UserRoleRepository>) -> Self {
        Self { profiles, roles }
    }

    /// Every profile with its current role, newest signup first
    pub async fn list_users(&self) -> ApiResult<Vec<UserWithRole>> {
        let profiles = self.profiles.list_all().await?;
        let assignments: HashMap<Uuid, UserRoleModel> = self
            .roles
            .list_all()
            .await?
            .into_iter()
            .map(|r| (r.user_id, r))
            .collect();

        Ok(profiles
            .into_iter()
            .map(|p| {
                let assignment = assignments.get(&p.id);
                UserWithRole {
                    id: p.id,
                    email: p.email.to_string(),
                    full_name: p.full_name.to_string(),
                    role: assignment.map(|a| a.role),
                    role_id: assignment.map(|a| a.id),
                }
            })
            .collect())
    }

    /// Set or clear a user's role
    ///
    /// `None` revokes the assignment, returning the user to the pending
    /// set; `Some` updates the existing assignment or creates one.
    pub async fn set_role(&self, user_id: Uuid, role: Option<UserRole>) -> ApiResult<()> {
        if self.profiles.find_by_id(user_id).await?.is_none() {
            return Err(ApiError::NotFound(format!("profile {user_id}")));
        }
        let existing = self.roles.find_by_user_id(user_id).await?;

        match (existing, role) {
            (Some(assignment), None) => {
                self.roles.delete(assignment.id).await?;
                tracing::info!(%user_id, "role revoked");
            }
            (Some(assignment), Some(role)) => {
                if assignment.role != role {
                    self.roles.update_role(assignment.id, role).await?;
                    tracing::info!(%user_id, %role, "role changed");
                }
            }
            (None, Some(role)) => {
                self.roles
                    .create(UserRoleModel {
                        id: Uuid::new_v4(),
                        user_id,
                        role,
                        created_at: Utc::now(),
                    })
                    .await?;
                tracing::info!(%user_id, %role, "role assigned");
            }
            (None, None) => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::memory::{self, Memory};

    fn service(memory: &Memory) -> UserAdminService {
        UserAdminService::new(Arc::new(memory.clone()), Arc::new(memory.clone()))
    }

    fn seed_profile(memory: &Memory, email: &str, name: &str) -> Uuid {
        let profile = memory::profile(email, name);
        let id = profile.id;
        memory.0.profiles.lock().unwrap().push(profile);
        id
    }

    #[tokio::test]
    async fn listing_joins_profiles_with_their_roles() {
        let memory = Memory::new();
        let svc = service(&memory);
        let with_role = seed_profile(&memory, "staff@petshop.test", "Staff Member");
        let without = seed_profile(&memory, "pending@petshop.test", "Pending User");
        svc.set_role(with_role, Some(UserRole::Staff)).await.unwrap();

        let users = svc.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        let staff = users.iter().find(|u| u.id == with_role).unwrap();
        assert_eq!(staff.role, Some(UserRole::Staff));
        assert!(staff.role_id.is_some());
        let pending = users.iter().find(|u| u.id == without).unwrap();
        assert_eq!(pending.role, None);
        assert!(pending.role_id.is_none());
    }

    #[tokio::test]
    async fn set_role_creates_updates_and_revokes() {
        let memory = Memory::new();
        let svc = service(&memory);
        let user = seed_profile(&memory, "user@petshop.test", "Some User");

        svc.set_role(user, Some(UserRole::Client)).await.unwrap();
        assert_eq!(memory.0.roles.lock().unwrap().len(), 1);

        svc.set_role(user, Some(UserRole::Admin)).await.unwrap();
        let assignment = memory.0.roles.lock().unwrap()[0].clone();
        assert_eq!(assignment.role, UserRole::Admin);

        svc.set_role(user, None).await.unwrap();
        assert!(memory.0.roles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn revoking_returns_the_user_to_pending() {
        let memory = Memory::new();
        let svc = service(&memory);
        let user = seed_profile(&memory, "demoted@petshop.test", "Demoted User");
        svc.set_role(user, Some(UserRole::Staff)).await.unwrap();
        svc.set_role(user, None).await.unwrap();

        let users = svc.list_users().await.unwrap();
        assert_eq!(users[0].role, None);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let memory = Memory::new();
        let err = service(&memory)
            .set_role(Uuid::new_v4(), Some(UserRole::Client))
            .await;
        assert!(matches!(err, Err(ApiError::NotFound(_))));
    }
}
