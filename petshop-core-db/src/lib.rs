pub mod change_feed;
pub mod models;
pub mod repository;

pub use change_feed::*;
pub use models::identifiable::Identifiable;
