pub mod repo_impl;

mod create;
mod delete;
mod find_by_user_id;
mod list_all;
mod update_role;

pub use repo_impl::UserRoleRepositoryImpl;
