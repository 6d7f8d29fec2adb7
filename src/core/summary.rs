//! Ledger aggregation: totals, per-account balances, category breakdowns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ledger::{Account, Transaction, TransactionKind};

/// Derived view of the whole ledger. `balance` is the sum of all account
/// balances; transfers move money between accounts without touching the
/// income/expense totals or category maps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub balances: BTreeMap<String, f64>,
    pub income_by_category: BTreeMap<String, f64>,
    pub expense_by_category: BTreeMap<String, f64>,
}

/// Aggregates the transaction list against the recognized accounts.
///
/// Each account seeds its balance with its opening balance. Transactions
/// referencing an unrecognized account still count toward the income and
/// expense totals, but leave every balance untouched.
pub fn compute_summary(transactions: &[Transaction], accounts: &[Account]) -> LedgerSummary {
    let mut balances: BTreeMap<String, f64> = accounts
        .iter()
        .map(|a| (a.name.clone(), a.opening_balance))
        .collect();
    let mut income = 0.0;
    let mut expense = 0.0;
    let mut income_by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut expense_by_category: BTreeMap<String, f64> = BTreeMap::new();

    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => {
                income += txn.amount;
                if let Some(balance) = balances.get_mut(&txn.payment_method) {
                    *balance += txn.amount;
                }
                *income_by_category.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
            }
            TransactionKind::Expense => {
                expense += txn.amount;
                if let Some(balance) = balances.get_mut(&txn.payment_method) {
                    *balance -= txn.amount;
                }
                *expense_by_category.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
            }
            TransactionKind::Transfer => {
                if let Some(balance) = balances.get_mut(&txn.payment_method) {
                    *balance -= txn.amount;
                }
                if let Some(to) = txn.transfer_to.as_deref() {
                    if let Some(balance) = balances.get_mut(to) {
                        *balance += txn.amount;
                    }
                }
            }
        }
    }

    let balance = balances.values().sum();

    LedgerSummary {
        income,
        expense,
        balance,
        balances,
        income_by_category,
        expense_by_category,
    }
}
