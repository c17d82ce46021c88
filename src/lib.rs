//! # Roster
//!
//! A file-backed employee roster with:
//! - Add / remove / update of employee records keyed by a unique id
//! - Department listing and per-department queries in roster order
//! - A checksummed, sentinel-terminated record file between runs
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        roster CLI                            │
//! │               (clap subcommands, demo sequence)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      RosterStore                             │
//! │              (load → mutate* → save lifecycle)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │   Roster    │          │   Storage    │
//!   │ (Vec, order)│          │(record file) │
//!   └─────────────┘          └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod employee;
pub mod roster;
pub mod storage;
pub mod command;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use employee::{Employee, EmployeeId, Field};
pub use roster::Roster;
pub use command::{Command, Outcome};
pub use store::{LoadSummary, RosterStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
