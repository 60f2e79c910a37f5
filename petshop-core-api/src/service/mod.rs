pub mod approval;
pub mod billing;
pub mod clients;
pub mod dashboard;
pub mod expenses;
pub mod pets;
pub mod reminders;
pub mod role_resolver;
pub mod scheduling;
pub mod user_admin;

#[cfg(test)]
pub(crate) mod memory;

pub use approval::*;
pub use billing::*;
pub use clients::*;
pub use dashboard::*;
pub use expenses::*;
pub use pets::*;
pub use reminders::*;
pub use role_resolver::*;
pub use scheduling::*;
pub use user_admin::*;
