pub mod repo_impl;

mod create;
mod delete;
mod find_by_client_id;
mod find_by_id;
mod list_with_owner;
mod update;

pub use repo_impl::PetRepositoryImpl;
