//! mfuko-core
//!
//! Aggregation services and the subscription client for Mfuko.
//! Depends on mfuko-domain. No terminal I/O, no network stack, no filesystem access.

pub mod budget_service;
pub mod error;
pub mod format;
pub mod progress;
pub mod ratio;
pub mod savings_service;
pub mod subscription;
pub mod summary_service;
pub mod time;
pub mod tip_service;
pub mod transaction_service;
pub mod validation;


pub use budget_service::*;
pub use error::{CoreError, CoreResult};
pub use format::*;
pub use progress::*;
pub use ratio::*;
pub use savings_service::*;
pub use subscription::*;
pub use summary_service::*;
pub use time::*;
pub use tip_service::*;
pub use transaction_service::*;
pub use validation::*;
