pub mod approval_history;
pub mod profile;
pub mod user_role;

// Re-exports
pub use approval_history::*;
pub use profile::*;
pub use user_role::*;
