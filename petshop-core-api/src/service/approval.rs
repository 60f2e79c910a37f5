use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use petshop_core_db::change_feed::ChangeFeed;
use petshop_core_db::models::access::approval_history::{ApprovalAction, ApprovalHistoryModel};
use petshop_core_db::models::access::user_role::{UserRole, UserRoleModel};
use petshop_core_db::repository::{
    ApprovalHistoryRepository, ApprovalRepository, ProfileRepository, UserRoleRepository,
};

use crate::domain::{bounded, PendingUser};
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// The user-approval workflow
///
/// A profile is pending when no role assignment exists for it; the set
/// is computed by difference, never stored. Approval and rejection go
/// through [`ApprovalRepository`] so each decision lands atomically
/// with its audit record.
pub struct ApprovalService {
    profiles: Arc<dyn ProfileRepository>,
    roles: Arc<dyn UserRoleRepository>,
    history: Arc<dyn ApprovalHistoryRepository>,
    approvals: Arc<dyn ApprovalRepository>,
}

impl ApprovalService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        roles: Arc<dyn UserRoleRepository>,
        history: Arc<dyn ApprovalHistoryRepository>,
        approvals: Arc<dyn ApprovalRepository>,
    ) -> Self {
        Self {
            profiles,
            roles,
            history,
            approvals,
        }
    }

    /// Profiles with no role assignment, newest signup first
    pub async fn list_pending(&self) -> ApiResult<Vec<PendingUser>> {
        let profiles = self.profiles.list_all().await?;
        let assigned: HashSet<Uuid> = self
            .roles
            .list_all()
            .await?
            .into_iter()
            .map(|r| r.user_id)
            .collect();

        Ok(profiles
            .into_iter()
            .filter(|p| !assigned.contains(&p.id))
            .map(|p| PendingUser {
                id: p.id,
                email: p.email.to_string(),
                full_name: p.full_name.to_string(),
                created_at: p.created_at,
            })
            .collect())
    }

    /// Grant `role` to a pending profile
    ///
    /// The role assignment and its audit record land in one unit. A
    /// second admin approving the same profile concurrently loses at
    /// the unique constraint on the assignment's user id.
    pub async fn approve(
        &self,
        profile_id: Uuid,
        role: UserRole,
        acting: &Session,
    ) -> ApiResult<()> {
        let profile = self
            .profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("profile {profile_id}")))?;

        if self.roles.find_by_user_id(profile_id).await?.is_some() {
            return Err(ApiError::ValidationError(
                "user already has a role assigned".to_string(),
            ));
        }

        let now = Utc::now();
        let assignment = UserRoleModel {
            id: Uuid::new_v4(),
            user_id: profile_id,
            role,
            created_at: now,
        };
        let record = ApprovalHistoryModel {
            id: Uuid::new_v4(),
            user_id: profile_id,
            user_email: profile.email.clone(),
            user_name: profile.full_name.clone(),
            action: ApprovalAction::Approved,
            assigned_role: Some(role),
            approved_by: acting.user_id,
            approved_by_email: bounded::<100>("approver email", &acting.email)?,
            created_at: now,
        };

        self.approvals.approve(assignment, record).await?;
        tracing::info!(user_id = %profile_id, %role, "user approved");
        Ok(())
    }

    /// Reject a pending profile, deleting it
    ///
    /// The audit record snapshots the subject's email and name and is
    /// written before the profile row goes away, in the same unit.
    pub async fn reject(&self, profile_id: Uuid, acting: &Session) -> ApiResult<()> {
        let profile = self
            .profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("profile {profile_id}")))?;

        let record = ApprovalHistoryModel {
            id: Uuid::new_v4(),
            user_id: profile_id,
            user_email: profile.email.clone(),
            user_name: profile.full_name.clone(),
            action: ApprovalAction::Rejected,
            assigned_role: None,
            approved_by: acting.user_id,
            approved_by_email: bounded::<100>("approver email", &acting.email)?,
            created_at: Utc::now(),
        };

        self.approvals.reject(profile_id, record).await?;
        tracing::info!(user_id = %profile_id, "user rejected");
        Ok(())
    }

    /// The most recent decisions, newest first
    pub async fn list_history(&self, limit: Option<i64>) -> ApiResult<Vec<ApprovalHistoryModel>> {
        Ok(self
            .history
            .list_recent(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
            .await?)
    }

    /// Keep a live count of pending users for the badge
    ///
    /// Spawns a task that recomputes the pending set on every change
    /// event from `feed` and publishes the count. Subscribers always
    /// see the latest count; intermediate values may be skipped.
    pub fn watch_pending(self: &Arc<Self>, feed: &dyn ChangeFeed) -> PendingBadge {
        let (tx, rx) = watch::channel(0usize);
        let mut events = feed.subscribe();
        let service = Arc::clone(self);

        let task = tokio::spawn(async move {
            match service.list_pending().await {
                Ok(pending) => {
                    tx.send_replace(pending.len());
                }
                Err(err) => tracing::warn!(error = %err, "initial pending count failed"),
            }

            loop {
                use tokio::sync::broadcast::error::RecvError;
                match events.recv().await {
                    // A lagged receiver still recomputes from scratch,
                    // so missed events cost nothing
                    Ok(_) | Err(RecvError::Lagged(_)) => {}
                    Err(RecvError::Closed) => break,
                }
                match service.list_pending().await {
                    Ok(pending) => {
                        tx.send_replace(pending.len());
                    }
                    Err(err) => tracing::warn!(error = %err, "pending count refresh failed"),
                }
            }
        });

        PendingBadge { rx, task }
    }
}

/// Live pending-user count; dropping it stops the refresh task
pub struct PendingBadge {
    rx: watch::Receiver<usize>,
    task: tokio::task::JoinHandle<()>,
}

impl PendingBadge {
    pub fn count(&self) -> usize {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.rx.clone()
    }
}

impl Drop for PendingBadge {
    fn drop(&mut self) {
        self.task.abort();
    }
}
