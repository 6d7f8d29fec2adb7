use serde::{Deserialize, Serialize};

/// A named balance bucket. Only the opening balance is stored; the current
/// balance is always derived from the transaction ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub opening_balance: f64,
}

impl Account {
    /// Creates an account with a zero opening balance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opening_balance: 0.0,
        }
    }

    pub fn with_opening_balance(name: impl Into<String>, opening_balance: f64) -> Self {
        Self {
            name: name.into(),
            opening_balance,
        }
    }
}
