pub mod identifiable;

pub mod access;
pub mod appointment;
pub mod client;
pub mod pet;
pub mod pet_expense;
pub mod transaction;
pub mod vaccine;

// Re-exports
pub use identifiable::*;
