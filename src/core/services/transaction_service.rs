//! Business logic helpers for managing transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Ledger, Transaction, TransactionKind};

/// Provides validated CRUD helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its identifier.
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<Uuid> {
        Self::validate(&transaction)?;
        Ok(ledger.add_transaction(transaction))
    }

    /// Updates the transaction identified by `id` via the provided mutator.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Transaction),
    {
        let txn = ledger
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        let mut updated = txn.clone();
        mutator(&mut updated);
        updated.id = txn.id;
        Self::validate(&updated)?;
        *txn = updated;
        ledger.touch();
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        ledger
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))
    }

    /// Returns a snapshot of the ledger's transactions, newest first.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }

    fn validate(transaction: &Transaction) -> ServiceResult<()> {
        if transaction.amount < 0.0 {
            return Err(ServiceError::Invalid("Amount cannot be negative".into()));
        }
        if transaction.payment_method.trim().is_empty() {
            return Err(ServiceError::Invalid("Payment method is required".into()));
        }
        if transaction.kind == TransactionKind::Transfer && transaction.transfer_to.is_none() {
            return Err(ServiceError::Invalid(
                "Transfer needs a destination account".into(),
            ));
        }
        if transaction.is_tuition_payment()
            && (transaction.student_name.is_none() || transaction.fee_month.is_none())
        {
            return Err(ServiceError::Invalid(
                "Tuition payment needs a student and fee month".into(),
            ));
        }
        Ok(())
    }
}
