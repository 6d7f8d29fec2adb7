//! Business logic helpers for managing accounts and opening balances.

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Account, Ledger};

/// Provides validated CRUD helpers for the recognized account set.
pub struct AccountService;

impl AccountService {
    pub fn add(ledger: &mut Ledger, account: Account) -> ServiceResult<()> {
        Self::validate_name(ledger, &account.name)?;
        ledger.add_account(account);
        Ok(())
    }

    /// Replaces the opening balance of the named account.
    pub fn set_opening_balance(
        ledger: &mut Ledger,
        name: &str,
        opening_balance: f64,
    ) -> ServiceResult<()> {
        let account = ledger
            .account_mut(name)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        account.opening_balance = opening_balance;
        ledger.touch();
        Ok(())
    }

    /// Removes the named account. Transactions referencing it stay behind;
    /// the aggregator silently ignores unrecognized account names.
    pub fn remove(ledger: &mut Ledger, name: &str) -> ServiceResult<Account> {
        ledger
            .remove_account(name)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))
    }

    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.accounts.iter().collect()
    }

    fn validate_name(ledger: &Ledger, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Account name cannot be empty".into()));
        }
        let duplicate = ledger
            .accounts
            .iter()
            .any(|account| account.name.trim().to_ascii_lowercase() == normalized);
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Account `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
