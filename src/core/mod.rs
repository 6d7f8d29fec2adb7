//! Computation cores and the validated service facade over the ledger.

pub mod fees;
pub mod services;
pub mod summary;

pub use fees::{compute_obligation, BillingPeriod, FeeObligation, FeeStatus, MAX_BILLING_PERIODS};
pub use summary::{compute_summary, LedgerSummary};
