use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{account::Account, loan::Loan, student::Student, transaction::Transaction};

pub(crate) const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Owns the Student/Transaction/Loan/Account collections. Callers mutate it
/// through the services in [`crate::core::services`]; the computation cores
/// only ever read snapshots of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            students: Vec::new(),
            transactions: Vec::new(),
            loans: Vec::new(),
            accounts: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Creates a ledger seeded with the given account names, all at a zero
    /// opening balance.
    pub fn with_accounts<I, S>(name: impl Into<String>, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::new(name);
        ledger.accounts = accounts.into_iter().map(Account::new).collect();
        ledger
    }

    pub fn add_student(&mut self, student: Student) -> Uuid {
        let id = student.id;
        self.students.push(student);
        self.touch();
        id
    }

    /// Inserts a transaction, keeping the list ordered newest-first.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.transactions
            .sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        self.touch();
        id
    }

    pub fn add_loan(&mut self, loan: Loan) -> Uuid {
        let id = loan.id;
        self.loans.push(loan);
        self.touch();
        id
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
        self.touch();
    }

    pub fn student(&self, id: Uuid) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn student_mut(&mut self, id: Uuid) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn student_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name == name)
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id == id)
    }

    pub fn loan(&self, id: Uuid) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    pub fn loan_mut(&mut self, id: Uuid) -> Option<&mut Loan> {
        self.loans.iter_mut().find(|l| l.id == id)
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.name == name)
    }

    pub fn remove_student(&mut self, id: Uuid) -> Option<Student> {
        let index = self.students.iter().position(|s| s.id == id)?;
        let removed = self.students.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn remove_loan(&mut self, id: Uuid) -> Option<Loan> {
        let index = self.loans.iter().position(|l| l.id == id)?;
        let removed = self.loans.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn remove_account(&mut self, name: &str) -> Option<Account> {
        let index = self.accounts.iter().position(|a| a.name == name)?;
        let removed = self.accounts.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
