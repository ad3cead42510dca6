// ============================================================
// OVERLAP RESULT
// ============================================================
// The record handed to the presentation shell

use serde::{Deserialize, Serialize};
use std::fmt;

/// The pair of employees with the longest shared tenure on one project.
///
/// Produced only for a strictly positive day count; "nothing found" is
/// expressed as the absence of this record, never as an all-zero one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlap {
    pub first_employee_id: i64,
    pub second_employee_id: i64,
    pub project_id: i64,
    pub days_together: u64,
}

impl fmt::Display for Overlap {
    /// The shell's label text: `"143, 218, 15, 452"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.first_employee_id, self.second_employee_id, self.project_id, self.days_together
        )
    }
}
