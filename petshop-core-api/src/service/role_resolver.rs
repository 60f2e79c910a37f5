use std::sync::Arc;

use petshop_core_db::models::access::user_role::UserRole;
use petshop_core_db::repository::UserRoleRepository;

use crate::error::ApiResult;
use crate::session::SessionStore;

/// The resolved access level of the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleResolution {
    /// None when signed out or when no role row exists (pending user)
    pub role: Option<UserRole>,
}

impl RoleResolution {
    pub fn is_admin(&self) -> bool {
        self.role == Some(UserRole::Admin)
    }

    pub fn is_staff(&self) -> bool {
        matches!(self.role, Some(UserRole::Admin) | Some(UserRole::Staff))
    }

    /// Signed in but not yet approved
    pub fn is_pending(&self) -> bool {
        self.role.is_none()
    }
}

/// Resolves the current session's role from its role assignment row
pub struct RoleResolver {
    sessions: SessionStore,
    roles: Arc<dyn UserRoleRepository>,
}

impl RoleResolver {
    pub fn new(sessions: SessionStore, roles: Arc<dyn UserRoleRepository>) -> Self {
        Self { sessions, roles }
    }

    /// Resolve the current session's role
    ///
    /// A repository failure surfaces as an error so callers guarding
    /// privileged operations can refuse instead of guessing.
    pub async fn resolve(&self) -> ApiResult<RoleResolution> {
        let Some(session) = self.sessions.current() else {
            return Ok(RoleResolution { role: None });
        };
        let assignment = self.roles.find_by_user_id(session.user_id).await?;
        Ok(RoleResolution {
            role: assignment.map(|a| a.role),
        })
    }

    /// Resolve, treating lookup failure as "no role"
    ///
    /// Display surfaces use this so a transient lookup failure renders
    /// the unprivileged view instead of an error screen.
    pub async fn resolve_or_none(&self) -> RoleResolution {
        match self.resolve().await {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(error = %err, "role lookup failed, treating as unassigned");
                RoleResolution { role: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::memory::{self, Memory};
    use crate::session::Session;
    use chrono::Utc;
    use uuid::Uuid;

    use petshop_core_db::models::access::user_role::UserRoleModel;

    fn signed_in(store: &SessionStore, user_id: Uuid) {
        store.set(Some(Session {
            user_id,
            email: "someone@petshop.test".to_string(),
        }));
    }

    #[tokio::test]
    async fn signed_out_resolves_to_no_role() {
        let memory = Memory::new();
        let sessions = SessionStore::new();
        let resolver = RoleResolver::new(sessions, Arc::new(memory));

        let resolution = resolver.resolve().await.unwrap();
        assert!(resolution.is_pending());
        assert!(!resolution.is_admin());
        assert!(!resolution.is_staff());
    }

    #[tokio::test]
    async fn assigned_role_is_resolved() {
        let memory = Memory::new();
        let user_id = Uuid::new_v4();
        memory.0.roles.lock().unwrap().push(UserRoleModel {
            id: Uuid::new_v4(),
            user_id,
            role: UserRole::Admin,
            created_at: Utc::now(),
        });

        let sessions = SessionStore::new();
        signed_in(&sessions, user_id);
        let resolver = RoleResolver::new(sessions, Arc::new(memory));

        let resolution = resolver.resolve().await.unwrap();
        assert!(resolution.is_admin());
        assert!(resolution.is_staff());
        assert!(!resolution.is_pending());
    }

    #[tokio::test]
    async fn signed_in_without_role_row_is_pending() {
        let memory = Memory::new();
        memory.0.profiles.lock().unwrap().push(memory::profile(
            "new@petshop.test",
            "New Hire",
        ));
        let pending_id = memory.0.profiles.lock().unwrap()[0].id;

        let sessions = SessionStore::new();
        signed_in(&sessions, pending_id);
        let resolver = RoleResolver::new(sessions, Arc::new(memory));

        let resolution = resolver.resolve().await.unwrap();
        assert!(resolution.is_pending());
    }

    #[tokio::test]
    async fn staff_is_not_admin() {
        let memory = Memory::new();
        let user_id = Uuid::new_v4();
        memory.0.roles.lock().unwrap().push(UserRoleModel {
            id: Uuid::new_v4(),
            user_id,
            role: UserRole::Staff,
            created_at: Utc::now(),
        });

        let sessions = SessionStore::new();
        signed_in(&sessions, user_id);
        let resolver = RoleResolver::new(sessions, Arc::new(memory));

        let resolution = resolver.resolve_or_none().await;
        assert!(resolution.is_staff());
        assert!(!resolution.is_admin());
    }
}
