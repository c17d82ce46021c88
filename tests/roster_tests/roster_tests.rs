//! Roster Tests
//!
//! Tests verify:
//! - Add with duplicate-id rejection
//! - Remove of present and absent ids
//! - Single-field updates and salary validation
//! - Department listing and filtering order

use roster::{Employee, Field, Roster, RosterError};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add(Employee::new(1, "Foo Bar", "IT", 100000)).unwrap();
    roster.add(Employee::new(2, "John Doe", "Finance", 50000)).unwrap();
    roster.add(Employee::new(3, "Jane Doe", "HR", 75000)).unwrap();
    roster
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_new_roster_is_empty() {
    let roster = Roster::new();
    assert!(roster.is_empty());
    assert_eq!(roster.len(), 0);
    assert!(roster.list_departments().is_empty());
}

#[test]
fn test_add_preserves_insertion_order() {
    let roster = sample_roster();

    let ids: Vec<u32> = roster.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_add_duplicate_id_rejected() {
    let mut roster = sample_roster();
    let before = roster.clone();

    let result = roster.add(Employee::new(2, "Someone Else", "Ops", 1));

    assert!(matches!(result, Err(RosterError::DuplicateIdentifier(2))));
    assert_eq!(roster, before);
}

#[test]
fn test_add_same_name_different_id_allowed() {
    let mut roster = sample_roster();

    roster.add(Employee::new(4, "Foo Bar", "IT", 100000)).unwrap();

    assert_eq!(roster.len(), 4);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_existing() {
    let mut roster = sample_roster();

    let removed = roster.remove(2).unwrap();

    assert_eq!(removed.name, "John Doe");
    assert_eq!(roster.len(), 2);
    assert!(!roster.contains(2));
    assert_eq!(roster.get(3).map(|e| e.name.as_str()), Some("Jane Doe"));
}

#[test]
fn test_remove_missing_id() {
    let mut roster = sample_roster();
    let before = roster.clone();

    let result = roster.remove(4);

    assert!(matches!(result, Err(RosterError::NotFound(4))));
    assert_eq!(roster, before);
}

#[test]
fn test_remove_then_readd_goes_to_end() {
    let mut roster = sample_roster();

    let removed = roster.remove(1).unwrap();
    roster.add(removed).unwrap();

    let ids: Vec<u32> = roster.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_name_only_changes_name() {
    let mut roster = sample_roster();

    roster.update(2, Field::Name, "Jonathon Doe").unwrap();

    assert_eq!(
        roster.get(2),
        Some(&Employee::new(2, "Jonathon Doe", "Finance", 50000))
    );
}

#[test]
fn test_update_dept_only_changes_dept() {
    let mut roster = sample_roster();

    let updated = roster.update(3, Field::Dept, "IT").unwrap().clone();

    assert_eq!(updated, Employee::new(3, "Jane Doe", "IT", 75000));
    assert_eq!(roster.get(1), Some(&Employee::new(1, "Foo Bar", "IT", 100000)));
}

#[test]
fn test_update_salary_parses_integer() {
    let mut roster = sample_roster();

    roster.update(2, Field::Salary, "100").unwrap();
    assert_eq!(roster.get(2).unwrap().salary, 100);

    roster.update(2, Field::Salary, " 50000 ").unwrap();
    assert_eq!(roster.get(2).unwrap().salary, 50000);

    // Wider than 32 bits
    roster.update(2, Field::Salary, "3000000000").unwrap();
    assert_eq!(roster.get(2).unwrap().salary, 3_000_000_000);
}

#[test]
fn test_update_salary_non_numeric_rejected() {
    let mut roster = sample_roster();
    let before = roster.clone();

    for bad in ["abc", "", "12.5", "1e3"] {
        let result = roster.update(2, Field::Salary, bad);
        match result {
            Err(RosterError::InvalidValue { field, value }) => {
                assert_eq!(field, Field::Salary);
                assert_eq!(value, bad);
            }
            other => panic!("expected InvalidValue for {:?}, got {:?}", bad, other),
        }
    }

    assert_eq!(roster, before);
}

#[test]
fn test_update_missing_id() {
    let mut roster = sample_roster();
    let before = roster.clone();

    let result = roster.update(9, Field::Name, "Nobody");

    assert!(matches!(result, Err(RosterError::NotFound(9))));
    assert_eq!(roster, before);
}

#[test]
fn test_update_missing_id_reported_before_bad_salary() {
    let mut roster = sample_roster();

    let result = roster.update(9, Field::Salary, "abc");

    assert!(matches!(result, Err(RosterError::NotFound(9))));
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_list_departments_distinct_first_seen() {
    let mut roster = sample_roster();
    roster.add(Employee::new(4, "Foo Bar #2", "IT", 120000)).unwrap();
    roster.add(Employee::new(5, "Ann", "HR", 1)).unwrap();

    assert_eq!(roster.list_departments(), vec!["IT", "Finance", "HR"]);
}

#[test]
fn test_list_departments_reflects_removals() {
    let mut roster = sample_roster();
    roster.remove(2).unwrap();

    assert_eq!(roster.list_departments(), vec!["IT", "HR"]);
}

#[test]
fn test_employees_in_dept_roster_order() {
    let mut roster = sample_roster();
    roster.add(Employee::new(4, "Foo Bar #2", "IT", 120000)).unwrap();

    let it: Vec<u32> = roster.employees_in_dept("IT").iter().map(|e| e.id).collect();
    assert_eq!(it, vec![1, 4]);
}

#[test]
fn test_employees_in_dept_exact_match() {
    let roster = sample_roster();

    assert!(roster.employees_in_dept("it").is_empty());
    assert!(roster.employees_in_dept("Marketing").is_empty());
}

#[test]
fn test_clear() {
    let mut roster = sample_roster();
    roster.clear();

    assert!(roster.is_empty());
}
