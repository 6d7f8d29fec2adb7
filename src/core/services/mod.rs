pub mod account_service;
pub mod fee_service;
pub mod loan_service;
pub mod student_service;
pub mod summary_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use fee_service::FeeService;
pub use loan_service::LoanService;
pub use student_service::StudentService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
}
