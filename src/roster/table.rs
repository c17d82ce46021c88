//! Roster implementation
//!
//! Vec-backed ordered roster, exclusively owned by one caller.

use std::collections::HashSet;

use crate::employee::{Employee, EmployeeId, Field};
use crate::error::{Result, RosterError};

/// Ordered collection of employees keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Records in insertion order
    employees: Vec<Employee>,
}

impl Roster {
    /// Create a new empty Roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an employee
    ///
    /// Fails with `DuplicateIdentifier` (roster unchanged) if the id is taken.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        if self.contains(employee.id) {
            return Err(RosterError::DuplicateIdentifier(employee.id));
        }
        self.employees.push(employee);
        Ok(())
    }

    /// Remove the employee with `id`, returning it
    pub fn remove(&mut self, id: EmployeeId) -> Result<Employee> {
        let pos = self.position(id).ok_or(RosterError::NotFound(id))?;
        Ok(self.employees.remove(pos))
    }

    /// Change a single field of the employee with `id`
    ///
    /// Salary values must parse as an integer; on failure nothing is changed.
    pub fn update(&mut self, id: EmployeeId, field: Field, value: &str) -> Result<&Employee> {
        let pos = self.position(id).ok_or(RosterError::NotFound(id))?;
        let employee = &mut self.employees[pos];

        match field {
            Field::Name => employee.name = value.to_string(),
            Field::Dept => employee.dept = value.to_string(),
            Field::Salary => employee.salary = parse_salary(value)?,
        }

        Ok(&self.employees[pos])
    }

    /// Distinct departments in first-seen order
    pub fn list_departments(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.employees
            .iter()
            .filter(|e| seen.insert(e.dept.as_str()))
            .map(|e| e.dept.clone())
            .collect()
    }

    /// Employees whose department equals `dept`, in roster order
    pub fn employees_in_dept(&self, dept: &str) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| e.dept == dept)
            .cloned()
            .collect()
    }

    /// Look up an employee by id
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.position(id).is_some()
    }

    /// All employees in roster order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.employees.clear();
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }
}

fn parse_salary(value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RosterError::InvalidValue {
            field: Field::Salary,
            value: value.to_string(),
        })
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}
