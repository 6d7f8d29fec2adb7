//! Business logic helpers for managing students.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::ledger::{Ledger, Student};

/// Provides validated CRUD helpers for student records.
pub struct StudentService;

impl StudentService {
    /// Adds a new student and returns their identifier.
    pub fn add(ledger: &mut Ledger, student: Student) -> ServiceResult<Uuid> {
        Self::validate_name(ledger, None, &student.name)?;
        if student.monthly_fee < 0.0 {
            return Err(ServiceError::Invalid("Monthly fee cannot be negative".into()));
        }
        Ok(ledger.add_student(student))
    }

    /// Updates the student identified by `id` via the provided mutator.
    pub fn update<F>(ledger: &mut Ledger, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut Student),
    {
        let student = ledger
            .student_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Student not found".into()))?;
        mutator(student);
        ledger.touch();
        Ok(())
    }

    /// Removes the student identified by `id`, returning the removed record.
    /// Their tuition transactions stay in the ledger.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Student> {
        ledger
            .remove_student(id)
            .ok_or_else(|| ServiceError::Invalid("Student not found".into()))
    }

    /// Returns a snapshot of the ledger's students.
    pub fn list(ledger: &Ledger) -> Vec<&Student> {
        ledger.students.iter().collect()
    }

    pub fn find_by_name<'a>(ledger: &'a Ledger, name: &str) -> Option<&'a Student> {
        ledger.student_by_name(name)
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Student name cannot be empty".into()));
        }
        let duplicate = ledger.students.iter().any(|student| {
            let name = student.name.trim().to_ascii_lowercase();
            name == normalized && exclude.map_or(true, |id| student.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Student `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
