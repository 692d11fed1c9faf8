use serde::{Deserialize, Serialize};

/// A cadet on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub period: String,
    pub notes: String,
    pub created_at: Option<String>,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, period: &str, notes: &str) -> Self {
        Student {
            id: None,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            period: period.trim().to_string(),
            notes: notes.to_string(),
            created_at: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
