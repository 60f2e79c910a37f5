pub mod approval_history_repository;
pub mod approval_repository;
pub mod profile_repository;
pub mod user_role_repository;

pub(crate) mod history_sql;

pub use approval_history_repository::ApprovalHistoryRepositoryImpl;
pub use approval_repository::ApprovalRepositoryImpl;
pub use profile_repository::ProfileRepositoryImpl;
pub use user_role_repository::UserRoleRepositoryImpl;
