use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An enrolled (or formerly enrolled) student.
///
/// `join_date` and `leave_date` stay as the raw `YYYY-MM-DD` strings the
/// caller captured; the fee engine parses them on demand and maps absent or
/// malformed values to terminal classifications rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub board: String,
    pub monthly_fee: f64,
    #[serde(default)]
    pub join_date: Option<String>,
    #[serde(default)]
    pub leave_date: Option<String>,
    #[serde(default = "Student::default_active")]
    pub active: bool,
}

impl Student {
    /// Creates an active student with display attributes left blank.
    pub fn new(name: impl Into<String>, monthly_fee: f64, join_date: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_name: String::new(),
            phone: String::new(),
            school: String::new(),
            standard: String::new(),
            medium: String::new(),
            board: String::new(),
            monthly_fee,
            join_date,
            leave_date: None,
            active: true,
        }
    }

    /// True when a leave date has been recorded, even one that fails to
    /// parse. Classification treats the student as departed either way.
    pub fn has_leave_date(&self) -> bool {
        self.leave_date.as_deref().is_some_and(|d| !d.is_empty())
    }

    pub fn default_active() -> bool {
        true
    }
}
