use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outstanding loan tracked alongside the ledger. Repayment expenses may
/// link back to it through `Transaction::loan_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Loan {
    pub id: Uuid,
    pub name: String,
    pub total: f64,
    #[serde(default)]
    pub paid: f64,
    #[serde(default)]
    pub emi: f64,
}

impl Loan {
    pub fn new(name: impl Into<String>, total: f64, emi: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total,
            paid: 0.0,
            emi,
        }
    }

    /// Remaining principal, independent of the fee engine.
    pub fn pending(&self) -> f64 {
        self.total - self.paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_total_minus_paid() {
        let mut loan = Loan::new("Scooter", 50_000.0, 2_500.0);
        assert_eq!(loan.pending(), 50_000.0);
        loan.paid = 12_500.0;
        assert_eq!(loan.pending(), 37_500.0);
    }
}
