pub mod repo_impl;

mod create;
mod delete;
mod list_all;
mod update;

pub use repo_impl::PetExpenseRepositoryImpl;
