//! Ledger-wide summary views.

use crate::core::summary::{compute_summary, LedgerSummary};
use crate::ledger::Ledger;

pub struct SummaryService;

impl SummaryService {
    /// Income/expense totals, per-account balances, and category breakdowns
    /// for the whole ledger.
    pub fn totals(ledger: &Ledger) -> LedgerSummary {
        compute_summary(&ledger.transactions, &ledger.accounts)
    }

    /// Current balance of one recognized account, if present.
    pub fn account_balance(ledger: &Ledger, name: &str) -> Option<f64> {
        Self::totals(ledger).balances.get(name).copied()
    }
}
