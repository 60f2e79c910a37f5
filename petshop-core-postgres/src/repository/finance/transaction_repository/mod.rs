pub mod repo_impl;

mod create;
mod delete;
mod find_by_client_id;
mod list_all;
mod set_payment_status;

pub use repo_impl::TransactionRepositoryImpl;
