pub mod repo_impl;

mod append;
mod list_recent;

pub use repo_impl::ApprovalHistoryRepositoryImpl;
