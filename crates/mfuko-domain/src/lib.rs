//! mfuko-domain
//!
//! Pure finance records (Transaction, Budget, SavingsGoal, FinancialTip, User, subscriptions).
//! No I/O, no formatting, no network. Only data types and closed tag enums.

pub mod budget;
pub mod common;
pub mod savings;
pub mod snapshot;
pub mod subscription;
pub mod tip;
pub mod transaction;
pub mod user;

pub use budget::*;
pub use common::*;
pub use savings::*;
pub use snapshot::*;
pub use subscription::*;
pub use tip::*;
pub use transaction::*;
pub use user::*;
