pub mod repo_impl;

mod find_by_id;
mod list_all;

pub use repo_impl::ProfileRepositoryImpl;
