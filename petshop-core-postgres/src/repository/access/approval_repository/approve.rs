use petshop_core_db::models::access::approval_history::ApprovalHistoryModel;
use petshop_core_db::models::access::user_role::UserRoleModel;
use petshop_core_db::repository::RepositoryError;

use super::repo_impl::ApprovalRepositoryImpl;
use crate::repository::access::history_sql::insert_history;

impl ApprovalRepositoryImpl {
    /// The role insert fails on the user_id unique constraint when a
    /// concurrent approval already landed, rolling back the history
    /// row with it.
    pub(super) async fn approve_impl(
        repo: &ApprovalRepositoryImpl,
        role: UserRoleModel,
        history: ApprovalHistoryModel,
    ) -> Result<(), RepositoryError> {
        let mut tx = repo.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO user_roles (id, user_id, role, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(role.id)
        .bind(role.user_id)
        .bind(role.role)
        .bind(role.created_at)
        .execute(&mut *tx)
        .await?;

        insert_history(&mut *tx, &history).await?;

        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_repositories;
    use chrono::Utc;
    use heapless::String as HeaplessString;
    use petshop_core_db::models::access::approval_history::{
        ApprovalAction, ApprovalHistoryModel,
    };
    use petshop_core_db::models::access::user_role::{UserRole, UserRoleModel};
    use petshop_core_db::repository::{
        ApprovalHistoryRepository, ApprovalRepository, UserRoleRepository,
    };
    use std::str::FromStr;
    use uuid::Uuid;

    fn hs(s: &str) -> HeaplessString<100> {
        HeaplessString::from_str(s).unwrap()
    }

    #[tokio::test]
    #[ignore]
    #[serial_test::serial]
    async fn test_second_approval_rolls_back_entirely(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (pool, repos) = setup_repositories().await?;
        let access = repos.access();

        let user_id = Uuid::new_v4();
        sqlx::query(
            r#"INSERT INTO profiles (id, email, full_name) VALUES ($1, 'hire@petshop.test', 'New Hire')"#,
        )
        .bind(user_id)
        .execute(&pool)
        .await?;

        let role = |id| UserRoleModel {
            id,
            user_id,
            role: UserRole::Staff,
            created_at: Utc::now(),
        };
        let history = || ApprovalHistoryModel {
            id: Uuid::new_v4(),
            user_id,
            user_email: hs("hire@petshop.test"),
            user_name: hs("New Hire"),
            action: ApprovalAction::Approved,
            assigned_role: Some(UserRole::Staff),
            approved_by: Uuid::new_v4(),
            approved_by_email: hs("admin@petshop.test"),
            created_at: Utc::now(),
        };

        access
            .approval_repository
            .approve(role(Uuid::new_v4()), history())
            .await?;

        // The unique constraint on user_id rejects the second approval
        // and must take its history row down with it
        let second = access
            .approval_repository
            .approve(role(Uuid::new_v4()), history())
            .await;
        assert!(second.is_err());

        assert!(access
            .user_role_repository
            .find_by_user_id(user_id)
            .await?
            .is_some());
        let recent = access.approval_history_repository.list_recent(10).await?;
        assert_eq!(recent.len(), 1);

        Ok(())
    }
}
