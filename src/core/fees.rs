//! Tuition fee-obligation engine.
//!
//! Given a student's enrollment window and the transaction ledger, derives
//! the billing schedule, paid/pending/advance amounts, the list of unpaid
//! months, and a status classification. Pure: the reference date is an
//! explicit input and identical inputs always produce identical output.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;
use crate::ledger::{Student, Transaction};

/// Runaway guard: enrollment windows are truncated past this many months.
pub const MAX_BILLING_PERIODS: usize = 60;

const DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Terminal classification of a student's fee position. Recomputed fresh on
/// every call; there is no persisted state machine behind it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeeStatus {
    New,
    #[serde(rename = "Invalid Date")]
    InvalidDate,
    Error,
    Paid,
    Due,
    Overdue,
    Advance,
    #[serde(rename = "Left (Paid)")]
    LeftPaid,
}

impl FeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::New => "New",
            FeeStatus::InvalidDate => "Invalid Date",
            FeeStatus::Error => "Error",
            FeeStatus::Paid => "Paid",
            FeeStatus::Due => "Due",
            FeeStatus::Overdue => "Overdue",
            FeeStatus::Advance => "Advance",
            FeeStatus::LeftPaid => "Left (Paid)",
        }
    }
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calendar month of a student's active window, with the fee expected
/// for it. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingPeriod {
    pub month: String,
    pub year: i32,
    pub amount: f64,
}

/// Result of a fee-obligation pass.
///
/// `pending` and `advance` are mutually exclusive: one is always zero.
/// `truncated` flags that the billing schedule hit [`MAX_BILLING_PERIODS`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeObligation {
    pub paid: f64,
    pub pending: f64,
    pub advance: f64,
    pub missing_months: Vec<String>,
    pub status: FeeStatus,
    #[serde(default)]
    pub truncated: bool,
}

impl FeeObligation {
    fn terminal(status: FeeStatus) -> Self {
        Self {
            paid: 0.0,
            pending: 0.0,
            advance: 0.0,
            missing_months: Vec::new(),
            status,
            truncated: false,
        }
    }
}

/// Computes a student's fee obligation against the full transaction list.
///
/// Never fails: a missing student or join date classifies as `New`, an
/// unparseable join date as `Invalid Date`, and any internal date fault as
/// `Error` (logged, zero amounts).
pub fn compute_obligation(
    student: Option<&Student>,
    transactions: &[Transaction],
    today: NaiveDate,
) -> FeeObligation {
    let Some(student) = student else {
        return FeeObligation::terminal(FeeStatus::New);
    };
    let join_raw = match student.join_date.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return FeeObligation::terminal(FeeStatus::New),
    };
    let Ok(join) = NaiveDate::parse_from_str(join_raw, DATE_FORMAT) else {
        return FeeObligation::terminal(FeeStatus::InvalidDate);
    };

    match obligation_for(student, join, transactions, today) {
        Ok(obligation) => obligation,
        Err(err) => {
            tracing::warn!(student = %student.name, error = %err, "fee obligation pass failed");
            FeeObligation::terminal(FeeStatus::Error)
        }
    }
}

/// Enumerates the billing schedule for a student who joined on `join`.
/// Returns the periods plus whether the runaway cap truncated them.
pub fn billing_schedule(
    student: &Student,
    join: NaiveDate,
    today: NaiveDate,
) -> Result<(Vec<BillingPeriod>, bool), TrackerError> {
    let end = window_end(student, today);
    enumerate_periods(join, end, student.monthly_fee)
}

fn obligation_for(
    student: &Student,
    join: NaiveDate,
    transactions: &[Transaction],
    today: NaiveDate,
) -> Result<FeeObligation, TrackerError> {
    let (periods, truncated) = billing_schedule(student, join, today)?;

    let payments: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_tuition_payment() && t.student_name.as_deref() == Some(student.name.as_str()))
        .collect();

    let paid: f64 = payments.iter().map(|t| t.amount).sum();
    let expected: f64 = periods.iter().map(|p| p.amount).sum();

    // Month labels match by name alone, so a window spanning two Januaries
    // collapses both onto one label and duplicates can appear here.
    let missing_months: Vec<String> = periods
        .iter()
        .filter(|p| {
            !payments
                .iter()
                .any(|t| t.fee_month.as_deref() == Some(p.month.as_str()))
        })
        .map(|p| p.month.clone())
        .collect();

    let pending_amount = expected - paid;

    let status = if student.has_leave_date() && pending_amount <= 0.0 {
        FeeStatus::LeftPaid
    } else if pending_amount > student.monthly_fee {
        FeeStatus::Overdue
    } else if pending_amount > 0.0 {
        FeeStatus::Due
    } else if pending_amount < 0.0 {
        FeeStatus::Advance
    } else {
        FeeStatus::Paid
    };

    Ok(FeeObligation {
        paid,
        pending: pending_amount.max(0.0),
        advance: (-pending_amount).max(0.0),
        missing_months,
        status,
        truncated,
    })
}

/// The obligation window ends at the leave date when one is recorded,
/// parseable, and already past; otherwise at `today`.
fn window_end(student: &Student, today: NaiveDate) -> NaiveDate {
    student
        .leave_date
        .as_deref()
        .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
        .filter(|leave| *leave < today)
        .unwrap_or(today)
}

fn enumerate_periods(
    join: NaiveDate,
    end: NaiveDate,
    monthly_fee: f64,
) -> Result<(Vec<BillingPeriod>, bool), TrackerError> {
    let mut periods = Vec::new();
    let mut current = join;
    while current <= end && periods.len() < MAX_BILLING_PERIODS {
        let amount = if periods.is_empty() && current.day() > 1 {
            pro_rata_fee(current, monthly_fee)?
        } else {
            monthly_fee
        };
        periods.push(BillingPeriod {
            month: MONTH_NAMES[current.month0() as usize].to_string(),
            year: current.year(),
            amount,
        });
        current = first_of_next_month(current)?;
    }
    Ok((periods, current <= end))
}

/// Partial first-month fee by remaining days in the join month.
fn pro_rata_fee(join: NaiveDate, monthly_fee: f64) -> Result<f64, TrackerError> {
    let days = days_in_month(join.year(), join.month())?;
    let remaining = days - join.day() + 1;
    Ok((monthly_fee * remaining as f64 / days as f64).round())
}

fn days_in_month(year: i32, month: u32) -> Result<u32, TrackerError> {
    let first = first_of_next_month_ymd(year, month)?;
    Ok(first.pred_opt().map(|d| d.day()).unwrap_or(28))
}

fn first_of_next_month(date: NaiveDate) -> Result<NaiveDate, TrackerError> {
    first_of_next_month_ymd(date.year(), date.month())
}

fn first_of_next_month_ymd(year: i32, month: u32) -> Result<NaiveDate, TrackerError> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| TrackerError::InvalidRef(format!("out-of-range month {next_year}-{next_month}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn first_of_next_month_rolls_over_december() {
        assert_eq!(
            first_of_next_month(date(2023, 12, 15)).unwrap(),
            date(2024, 1, 1)
        );
        assert_eq!(
            first_of_next_month(date(2024, 1, 31)).unwrap(),
            date(2024, 2, 1)
        );
    }

    #[test]
    fn pro_rata_rounds_to_nearest_rupee() {
        // 16 remaining days of 31 at fee 1000 -> 516.129... -> 516
        assert_eq!(pro_rata_fee(date(2024, 1, 16), 1000.0).unwrap(), 516.0);
        // joining on the last day of February
        assert_eq!(pro_rata_fee(date(2024, 2, 29), 2900.0).unwrap(), 100.0);
    }

    #[test]
    fn schedule_starts_on_join_day_then_first_of_month() {
        let student = Student::new("A", 1000.0, Some("2024-01-15".into()));
        let (periods, truncated) =
            billing_schedule(&student, date(2024, 1, 15), date(2024, 3, 10)).unwrap();
        assert!(!truncated);
        let labels: Vec<&str> = periods.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, vec!["January", "February", "March"]);
        assert_eq!(periods[0].amount, 548.0); // 17 of 31 days
        assert_eq!(periods[1].amount, 1000.0);
    }

    #[test]
    fn future_join_date_yields_empty_schedule() {
        let student = Student::new("A", 1000.0, Some("2030-01-01".into()));
        let (periods, truncated) =
            billing_schedule(&student, date(2030, 1, 1), date(2024, 3, 10)).unwrap();
        assert!(periods.is_empty());
        assert!(!truncated);
    }

    #[test]
    fn status_display_matches_labels() {
        assert_eq!(FeeStatus::LeftPaid.to_string(), "Left (Paid)");
        assert_eq!(FeeStatus::InvalidDate.to_string(), "Invalid Date");
        assert_eq!(FeeStatus::Overdue.to_string(), "Overdue");
    }
}
