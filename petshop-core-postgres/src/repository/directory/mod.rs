pub mod client_repository;
pub mod pet_repository;
pub mod vaccine_repository;

pub use client_repository::ClientRepositoryImpl;
pub use pet_repository::PetRepositoryImpl;
pub use vaccine_repository::VaccineRepositoryImpl;
