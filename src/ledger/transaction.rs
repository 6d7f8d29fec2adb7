use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category sentinel that marks an income transaction as a tuition payment.
pub const TUITION_CATEGORY: &str = "Tuition Fees";

/// Category carried by every transfer.
pub const TRANSFER_CATEGORY: &str = "Transfer";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

/// A single ledger entry. Identity is the `id`; fields are mutated in place
/// through the transaction service's update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub kind: TransactionKind,
    pub category: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_to: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_id: Option<Uuid>,
}

impl Transaction {
    pub fn income(
        amount: f64,
        category: impl Into<String>,
        payment_method: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::base(amount, TransactionKind::Income, category, payment_method, date)
    }

    pub fn expense(
        amount: f64,
        category: impl Into<String>,
        payment_method: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::base(amount, TransactionKind::Expense, category, payment_method, date)
    }

    /// Builds a transfer between two accounts. Transfers always carry the
    /// fixed "Transfer" category and never touch income/expense totals.
    pub fn transfer(
        amount: f64,
        from: impl Into<String>,
        to: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        let mut txn = Self::base(
            amount,
            TransactionKind::Transfer,
            TRANSFER_CATEGORY,
            from.clone(),
            date,
        );
        txn.description = format!("Transfer: {} -> {}", from, to);
        txn.transfer_to = Some(to);
        txn
    }

    /// Builds a tuition fee payment attributed to a student and fee month.
    pub fn tuition(
        student_name: impl Into<String>,
        fee_month: impl Into<String>,
        amount: f64,
        payment_method: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let student_name = student_name.into();
        let fee_month = fee_month.into();
        let mut txn = Self::income(amount, TUITION_CATEGORY, payment_method, date);
        txn.description = format!("Tuition: {} ({})", student_name, fee_month);
        txn.student_name = Some(student_name);
        txn.fee_month = Some(fee_month);
        txn
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_loan(mut self, loan_id: Uuid) -> Self {
        self.loan_id = Some(loan_id);
        self
    }

    /// True when this entry counts toward a student's tuition obligation.
    pub fn is_tuition_payment(&self) -> bool {
        self.kind == TransactionKind::Income && self.category == TUITION_CATEGORY
    }

    fn base(
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        payment_method: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: String::new(),
            kind,
            category: category.into(),
            payment_method: payment_method.into(),
            transfer_to: None,
            date,
            created_at: Utc::now(),
            student_name: None,
            fee_month: None,
            loan_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn transfer_forces_category_and_destination() {
        let txn = Transaction::transfer(100.0, "HDFC Bank", "Cash", date(2024, 3, 1));
        assert_eq!(txn.kind, TransactionKind::Transfer);
        assert_eq!(txn.category, TRANSFER_CATEGORY);
        assert_eq!(txn.transfer_to.as_deref(), Some("Cash"));
        assert!(!txn.is_tuition_payment());
    }

    #[test]
    fn tuition_payment_carries_student_and_month() {
        let txn = Transaction::tuition("Ayesha", "January", 1000.0, "Cash", date(2024, 1, 5));
        assert!(txn.is_tuition_payment());
        assert_eq!(txn.student_name.as_deref(), Some("Ayesha"));
        assert_eq!(txn.fee_month.as_deref(), Some("January"));
        assert_eq!(txn.description, "Tuition: Ayesha (January)");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let txn = Transaction::income(50.0, "Other", "Cash", date(2024, 1, 1));
        let json = serde_json::to_value(&txn).expect("serialize transaction");
        assert_eq!(json["kind"], "income");
    }
}
