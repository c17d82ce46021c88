//! Employee record definitions
//!
//! The plain data struct stored in the roster, plus the selector for
//! updatable fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Natural key of an employee
pub type EmployeeId = u32;

/// A single employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier within the roster
    pub id: EmployeeId,

    pub name: String,

    /// Department name, compared exactly (case-sensitive)
    pub dept: String,

    pub salary: i64,
}

impl Employee {
    /// Create a new employee record
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        dept: impl Into<String>,
        salary: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dept: dept.into(),
            salary,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{id={}, name='{}', dept='{}', salary={}}}",
            self.id, self.name, self.dept, self.salary
        )
    }
}

/// Fields that can be changed through an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Dept,
    Salary,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Dept => "dept",
            Field::Salary => "salary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "dept" | "department" => Ok(Field::Dept),
            "salary" => Ok(Field::Salary),
            _ => Err(RosterError::InvalidField(s.to_string())),
        }
    }
}
