pub mod pet_expense_repository;
pub mod transaction_repository;

pub use pet_expense_repository::PetExpenseRepositoryImpl;
pub use transaction_repository::TransactionRepositoryImpl;
