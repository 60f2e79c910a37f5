pub mod listener;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use listener::PgChangeFeed;
pub use postgres_repositories::PostgresRepositories;

#[cfg(test)]
pub mod test_helper;
