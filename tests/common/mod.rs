#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;
use tuition_core::config::ConfigManager;
use tuition_core::storage::LedgerStore;
use tuition_core::{Ledger, Student, Transaction};

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates isolated store/config managers backed by a unique directory.
pub fn setup_test_env() -> (LedgerStore, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = LedgerStore::with_base_dir(base.clone()).expect("create ledger store");
    let config = ConfigManager::with_base_dir(base).expect("create config manager");

    (store, config)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A student enrolled from the first of January 2024 at a 1000/month fee.
pub fn enrolled_student() -> Student {
    Student::new("Ayesha Khan", 1000.0, Some("2024-01-01".into()))
}

/// Ledger with the two-account fixture used by the summary suites.
pub fn cash_bank_ledger() -> Ledger {
    let mut ledger = Ledger::with_accounts("Classes", ["Cash", "Bank"]);
    if let Some(bank) = ledger.account_mut("Bank") {
        bank.opening_balance = 500.0;
    }
    ledger
}

pub fn tuition_payment(student: &Student, fee_month: &str, amount: f64) -> Transaction {
    Transaction::tuition(
        student.name.clone(),
        fee_month,
        amount,
        "Cash",
        date(2024, 1, 5),
    )
}
