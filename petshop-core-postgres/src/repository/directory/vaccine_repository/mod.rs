pub mod repo_impl;

mod create;
mod delete;
mod find_by_pet_id;
mod find_expiring_before;

pub use repo_impl::VaccineRepositoryImpl;
