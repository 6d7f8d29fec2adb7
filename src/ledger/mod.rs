//! Ledger domain models, persistence-friendly types, and helpers.

pub mod account;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod loan;
pub mod student;
pub mod transaction;

pub use account::Account;
pub use ledger::Ledger;
pub use loan::Loan;
pub use student::Student;
pub use transaction::{Transaction, TransactionKind, TRANSFER_CATEGORY, TUITION_CATEGORY};
