//! Business logic helpers for managing loans.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Ledger, Loan};

/// Provides validated CRUD helpers for loan records.
pub struct LoanService;

impl LoanService {
    /// Adds a new loan and returns its identifier.
    pub fn add(ledger: &mut Ledger, loan: Loan) -> ServiceResult<Uuid> {
        if loan.total < 0.0 || loan.paid < 0.0 || loan.emi < 0.0 {
            return Err(ServiceError::Invalid("Loan amounts cannot be negative".into()));
        }
        Ok(ledger.add_loan(loan))
    }

    /// Updates the loan identified by `id` via the provided mutator.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Loan),
    {
        let loan = ledger
            .loan_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Loan not found".into()))?;
        mutator(loan);
        ledger.touch();
        Ok(())
    }

    /// Removes the loan identified by `id`, returning the removed record.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Loan> {
        ledger
            .remove_loan(id)
            .ok_or_else(|| ServiceError::Invalid("Loan not found".into()))
    }

    /// Returns a snapshot of the ledger's loans.
    pub fn list(ledger: &Ledger) -> Vec<&Loan> {
        ledger.loans.iter().collect()
    }
}
