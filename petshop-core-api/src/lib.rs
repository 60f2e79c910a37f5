pub mod domain;
pub mod error;
pub mod service;
pub mod session;
pub mod storage;

pub use domain::*;
pub use error::*;
pub use service::*;
pub use session::*;
pub use storage::*;
