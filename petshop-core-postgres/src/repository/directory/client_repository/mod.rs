pub mod repo_impl;

mod create;
mod delete;
mod find_by_id;
mod list_all;
mod list_with_pet_counts;
mod update;

pub use repo_impl::ClientRepositoryImpl;
