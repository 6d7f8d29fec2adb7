mod common;

use common::{date, enrolled_student, tuition_payment};
use tuition_core::core::services::{
    AccountService, FeeService, LoanService, ServiceError, StudentService, TransactionService,
};
use tuition_core::{FeeStatus, Ledger, Loan, Student, Transaction};
use uuid::Uuid;

#[test]
fn student_lifecycle_roundtrip() {
    let mut ledger = Ledger::new("Classes");
    let id = StudentService::add(&mut ledger, enrolled_student()).expect("add student");

    StudentService::update(&mut ledger, id, |s| s.monthly_fee = 1200.0).expect("update student");
    assert_eq!(ledger.student(id).unwrap().monthly_fee, 1200.0);

    let removed = StudentService::remove(&mut ledger, id).expect("remove student");
    assert_eq!(removed.name, "Ayesha Khan");
    assert!(StudentService::list(&ledger).is_empty());
}

#[test]
fn deleting_a_student_keeps_their_transactions() {
    let mut ledger = Ledger::new("Classes");
    let student = enrolled_student();
    let id = StudentService::add(&mut ledger, student.clone()).unwrap();
    TransactionService::add(&mut ledger, tuition_payment(&student, "January", 1000.0)).unwrap();

    StudentService::remove(&mut ledger, id).unwrap();
    assert_eq!(ledger.transaction_count(), 1);
}

#[test]
fn transfer_without_destination_is_rejected() {
    let mut ledger = Ledger::new("Classes");
    let mut txn = Transaction::transfer(100.0, "Cash", "Bank", date(2024, 1, 1));
    txn.transfer_to = None;
    let err = TransactionService::add(&mut ledger, txn).expect_err("must fail");
    assert!(
        matches!(err, ServiceError::Invalid(ref message) if message.contains("destination")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn update_rejects_edits_that_break_validation() {
    let mut ledger = Ledger::new("Classes");
    let id = TransactionService::add(
        &mut ledger,
        Transaction::expense(80.0, "Rent", "Cash", date(2024, 1, 1)),
    )
    .unwrap();

    let err = TransactionService::update(&mut ledger, id, |t| t.amount = -5.0)
        .expect_err("negative amount must fail");
    assert!(matches!(err, ServiceError::Invalid(_)));
    // The stored record is untouched after the failed update.
    assert_eq!(ledger.transaction(id).unwrap().amount, 80.0);
}

#[test]
fn loan_repayments_reduce_pending() {
    let mut ledger = Ledger::new("Classes");
    let loan_id = LoanService::add(&mut ledger, Loan::new("Scooter", 50_000.0, 2_500.0)).unwrap();

    let emi = Transaction::expense(2_500.0, "Loan/EMI", "Cash", date(2024, 1, 10)).with_loan(loan_id);
    TransactionService::add(&mut ledger, emi).unwrap();
    LoanService::update(&mut ledger, loan_id, |l| l.paid += 2_500.0).unwrap();

    assert_eq!(ledger.loan(loan_id).unwrap().pending(), 47_500.0);
    assert_eq!(
        ledger.transactions[0].loan_id,
        Some(loan_id),
        "EMI expense stays linked to the loan"
    );
}

#[test]
fn fee_service_reflects_ledger_state() {
    let mut ledger = Ledger::with_accounts("Classes", ["Cash"]);
    let student = enrolled_student();
    let id = StudentService::add(&mut ledger, student.clone()).unwrap();

    let before = FeeService::obligation(&ledger, id, date(2024, 3, 15));
    assert_eq!(before.status, FeeStatus::Overdue);

    TransactionService::add(&mut ledger, tuition_payment(&student, "January", 1000.0)).unwrap();
    TransactionService::add(&mut ledger, tuition_payment(&student, "February", 1000.0)).unwrap();
    TransactionService::add(&mut ledger, tuition_payment(&student, "March", 1000.0)).unwrap();

    let after = FeeService::obligation(&ledger, id, date(2024, 3, 15));
    assert_eq!(after.status, FeeStatus::Paid);
    assert_eq!(after.paid, 3000.0);
}

#[test]
fn fee_service_handles_unknown_ids() {
    let ledger = Ledger::new("Classes");
    let result = FeeService::obligation(&ledger, Uuid::new_v4(), date(2024, 3, 15));
    assert_eq!(result.status, FeeStatus::New);
}

#[test]
fn account_opening_balance_updates_flow_into_summary() {
    let mut ledger = Ledger::with_accounts("Classes", ["Cash"]);
    AccountService::set_opening_balance(&mut ledger, "Cash", 1_500.0).unwrap();
    assert_eq!(
        tuition_core::core::services::SummaryService::account_balance(&ledger, "Cash"),
        Some(1_500.0)
    );
}

#[test]
fn obligations_listing_matches_student_order() {
    let mut ledger = Ledger::new("Classes");
    let a = StudentService::add(&mut ledger, enrolled_student()).unwrap();
    let b = StudentService::add(
        &mut ledger,
        Student::new("Zoya Patel", 800.0, Some("2024-03-01".into())),
    )
    .unwrap();

    let results = FeeService::obligations(&ledger, date(2024, 3, 15));
    assert_eq!(results.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![a, b]);
}
