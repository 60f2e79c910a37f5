pub mod repo_impl;

mod approve;
mod reject;

pub use repo_impl::ApprovalRepositoryImpl;
