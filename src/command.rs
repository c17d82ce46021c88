//! Command definitions
//!
//! Operations the store can execute on behalf of a caller (the CLI), and
//! the outcomes they produce.

use std::fmt;

use crate::employee::{Employee, EmployeeId, Field};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    Remove,
    Update,
    List,
    ListDepartments,
    EmployeesInDept,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new employee
    Add { employee: Employee },

    /// Remove an employee by id
    Remove { id: EmployeeId },

    /// Change one field of an employee
    Update {
        id: EmployeeId,
        field: Field,
        value: String,
    },

    /// List every employee
    List,

    /// List distinct departments
    ListDepartments,

    /// List employees of one department
    EmployeesInDept { dept: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add { .. } => CommandType::Add,
            Command::Remove { .. } => CommandType::Remove,
            Command::Update { .. } => CommandType::Update,
            Command::List => CommandType::List,
            Command::ListDepartments => CommandType::ListDepartments,
            Command::EmployeesInDept { .. } => CommandType::EmployeesInDept,
        }
    }

    /// Whether executing this command changes the roster
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.command_type(),
            CommandType::Add | CommandType::Remove | CommandType::Update
        )
    }
}

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Employee),
    Removed(Employee),
    Updated(Employee),
    Departments(Vec<String>),
    Employees(Vec<Employee>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added(e) => write!(f, "Employee {} has been added!", e.name),
            Outcome::Removed(e) => write!(f, "Employee ID:{} was removed!", e.id),
            Outcome::Updated(e) => write!(f, "Employee updated: {}", e),
            Outcome::Departments(depts) => write!(f, "[{}]", depts.join(", ")),
            Outcome::Employees(employees) => {
                f.write_str("[")?;
                for (i, e) in employees.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                f.write_str("]")
            }
        }
    }
}
