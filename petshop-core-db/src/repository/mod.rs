pub mod appointment_repository;
pub mod approval_history_repository;
pub mod approval_repository;
pub mod client_repository;
pub mod pet_expense_repository;
pub mod pet_repository;
pub mod profile_repository;
pub mod transaction_repository;
pub mod user_role_repository;
pub mod vaccine_repository;

// Re-exports
pub use appointment_repository::*;
pub use approval_history_repository::*;
pub use approval_repository::*;
pub use client_repository::*;
pub use pet_expense_repository::*;
pub use pet_repository::*;
pub use profile_repository::*;
pub use transaction_repository::*;
pub use user_role_repository::*;
pub use vaccine_repository::*;

/// Error type shared by all repository traits
pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;
