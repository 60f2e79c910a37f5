pub mod access;
pub mod db_init;
pub mod directory;
pub mod finance;
pub mod scheduling;
