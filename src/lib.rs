#![doc(test(attr(deny(warnings))))]

//! Tuition Core tracks a single coaching class's finances: an income /
//! expense / transfer ledger, per-student tuition fee obligations, and
//! derived account balances. The computation cores are pure functions over
//! ledger snapshots; callers own mutation through the service facade.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

pub use crate::core::{
    compute_obligation, compute_summary, BillingPeriod, FeeObligation, FeeStatus, LedgerSummary,
    MAX_BILLING_PERIODS,
};
pub use crate::errors::TrackerError;
pub use crate::ledger::{Account, Ledger, Loan, Student, Transaction, TransactionKind};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tuition Core tracing initialized.");
    });
}
