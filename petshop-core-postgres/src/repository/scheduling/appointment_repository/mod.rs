pub mod repo_impl;

mod create_batch;
mod delete;
mod find_by_date;
mod update_status;

pub use repo_impl::AppointmentRepositoryImpl;
