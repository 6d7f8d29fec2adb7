//! Fee obligation views over the ledger.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::core::fees::{compute_obligation, FeeObligation};
use crate::ledger::Ledger;

/// Read-only facade over the fee obligation calculator. The reference date
/// is explicit on every entry point so callers stay in control of "today";
/// the `*_now` variants supply the local wall-clock date.
pub struct FeeService;

impl FeeService {
    /// Obligation for one student. An unknown id classifies as `New`, the
    /// calculator's terminal state for "nothing to compute".
    pub fn obligation(ledger: &Ledger, student_id: Uuid, today: NaiveDate) -> FeeObligation {
        compute_obligation(ledger.student(student_id), &ledger.transactions, today)
    }

    pub fn obligation_now(ledger: &Ledger, student_id: Uuid) -> FeeObligation {
        Self::obligation(ledger, student_id, Local::now().date_naive())
    }

    /// Obligations for every student, in ledger order.
    pub fn obligations(ledger: &Ledger, today: NaiveDate) -> Vec<(Uuid, FeeObligation)> {
        ledger
            .students
            .iter()
            .map(|student| {
                (
                    student.id,
                    compute_obligation(Some(student), &ledger.transactions, today),
                )
            })
            .collect()
    }

    pub fn obligations_now(ledger: &Ledger) -> Vec<(Uuid, FeeObligation)> {
        Self::obligations(ledger, Local::now().date_naive())
    }
}
