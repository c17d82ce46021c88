//! Roster Module
//!
//! In-memory collection of employee records.
//!
//! ## Responsibilities
//! - Hold records in insertion order (listing order)
//! - Enforce at most one record per identifier
//! - Field-level updates in place
//! - Department queries over the current snapshot
//!
//! ## Data Structure Choice
//! A plain `Vec<Employee>` with linear id lookup:
//! - Insertion order falls out for free
//! - Roster sizes are administrative, not performance-critical

mod table;

pub use table::Roster;
