//! Store Module
//!
//! The roster store that coordinates the in-memory roster and its file.
//!
//! ## Responsibilities
//! - Load the roster from the configured file on open
//! - Route add/remove/update/query operations to the roster
//! - Save the roster back, flushed (and optionally synced) to disk
//!
//! ## Lifecycle
//! ```text
//! open (load) ──► add / remove / update / query * ──► save / close
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::employee::{Employee, EmployeeId, Field};
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::storage::{replace_file, RecordReader, RecordWriter};

/// Summary of a load operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records inserted into the roster
    pub records_loaded: u64,

    /// Records skipped because their id was already present
    pub records_skipped: u64,

    /// Whether the end-of-records marker was seen
    pub reached_sentinel: bool,
}

/// The roster store
///
/// Exclusively owned by a single caller; every mutation takes `&mut self`.
pub struct RosterStore {
    /// Store configuration
    config: Config,

    /// In-memory roster
    roster: Roster,
}

impl RosterStore {
    /// Open a store, loading the roster from `config.roster_path`
    ///
    /// A missing file yields an empty roster (and an empty file when
    /// `create_if_missing` is set). Malformed data is returned as an error.
    pub fn open(config: Config) -> Result<Self> {
        if config.roster_path.as_os_str().is_empty() {
            return Err(RosterError::Config("roster path is empty".to_string()));
        }

        let mut store = Self::in_memory(config);
        store.load()?;
        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified roster file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().roster_path(path).build())
    }

    /// Create a store with an empty roster, without touching the file
    pub fn in_memory(config: Config) -> Self {
        Self {
            config,
            roster: Roster::new(),
        }
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { employee } => {
                self.roster.add(employee.clone())?;
                Ok(Outcome::Added(employee))
            }
            Command::Remove { id } => self.remove(id).map(Outcome::Removed),
            Command::Update { id, field, value } => self
                .update(id, field, &value)
                .map(|e| Outcome::Updated(e.clone())),
            Command::List => Ok(Outcome::Employees(self.employees().to_vec())),
            Command::ListDepartments => Ok(Outcome::Departments(self.list_departments())),
            Command::EmployeesInDept { dept } => {
                Ok(Outcome::Employees(self.employees_in_dept(&dept)))
            }
        }
    }

    // =========================================================================
    // Roster Operations
    // =========================================================================

    /// Add a new employee
    ///
    /// Fails with `DuplicateIdentifier` if `id` is already present.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        dept: impl Into<String>,
        salary: i64,
        id: EmployeeId,
    ) -> Result<()> {
        self.roster.add(Employee::new(id, name, dept, salary))?;
        tracing::debug!(id, "employee added");
        Ok(())
    }

    /// Remove an employee by id
    pub fn remove(&mut self, id: EmployeeId) -> Result<Employee> {
        let removed = self.roster.remove(id)?;
        tracing::debug!(id, "employee removed");
        Ok(removed)
    }

    /// Update one field of an employee
    pub fn update(&mut self, id: EmployeeId, field: Field, value: &str) -> Result<&Employee> {
        let updated = self.roster.update(id, field, value)?;
        tracing::debug!(id, %field, "employee updated");
        Ok(updated)
    }

    /// Distinct departments in first-seen order
    pub fn list_departments(&self) -> Vec<String> {
        self.roster.list_departments()
    }

    /// Employees of `dept`, in roster order
    pub fn employees_in_dept(&self, dept: &str) -> Vec<Employee> {
        self.roster.employees_in_dept(dept)
    }

    /// All employees in roster order
    pub fn employees(&self) -> &[Employee] {
        self.roster.employees()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load records from a stream until the end-of-records marker
    ///
    /// The whole stream is decoded before anything is inserted, so a
    /// malformed stream leaves the roster unchanged. Records whose id is
    /// already present are skipped.
    pub fn load_from<R: Read>(&mut self, source: R) -> Result<LoadSummary> {
        let mut reader = RecordReader::new(source);
        let mut decoded = Vec::new();
        while let Some(employee) = reader.next_record()? {
            decoded.push(employee);
        }

        let mut summary = LoadSummary {
            reached_sentinel: reader.reached_sentinel(),
            ..LoadSummary::default()
        };

        for employee in decoded {
            let id = employee.id;
            match self.roster.add(employee) {
                Ok(()) => summary.records_loaded += 1,
                Err(RosterError::DuplicateIdentifier(_)) => {
                    tracing::warn!(id, "duplicate employee id in roster file, skipping");
                    summary.records_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }

    /// Serialize every record followed by the end-of-records marker
    ///
    /// Returns the number of records written. All buffered output is
    /// flushed before returning.
    pub fn save_to<W: Write>(&self, destination: W) -> Result<u64> {
        let (_, written) = self.write_records(destination)?;
        Ok(written)
    }

    /// Load from the configured roster file
    pub fn load(&mut self) -> Result<LoadSummary> {
        let path = self.config.roster_path.clone();

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if is_missing(&path, &e) => {
                tracing::warn!(path = %path.display(), "roster file not found, starting empty");
                if self.config.create_if_missing {
                    match create_empty_file(&path) {
                        Ok(()) => {
                            tracing::info!(path = %path.display(), "created empty roster file")
                        }
                        Err(e) => tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "could not create roster file, continuing with empty roster"
                        ),
                    }
                }
                return Ok(LoadSummary::default());
            }
            Err(e) => return Err(e.into()),
        };

        let summary = self.load_from(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            loaded = summary.records_loaded,
            skipped = summary.records_skipped,
            "roster read complete"
        );
        Ok(summary)
    }

    /// Save to the configured roster file (last write wins)
    ///
    /// The file is replaced only after every record and the end marker are
    /// written; a failed save keeps the previous file.
    pub fn save(&self) -> Result<u64> {
        let path = &self.config.roster_path;

        let written = replace_file(path, self.config.sync_on_save, |file| {
            let (_, written) = self.write_records(file)?;
            Ok(written)
        })?;

        tracing::info!(path = %path.display(), records = written, "roster write complete");
        Ok(written)
    }

    /// Close the store, saving the roster
    pub fn close(self) -> Result<()> {
        self.save()?;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the in-memory roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get the roster file path
    pub fn path(&self) -> &Path {
        &self.config.roster_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_records<W: Write>(&self, destination: W) -> Result<(W, u64)> {
        let mut writer = RecordWriter::new(destination)?;
        for employee in &self.roster {
            writer.write_record(employee)?;
        }
        let written = writer.records_written();
        Ok((writer.finish()?, written))
    }
}

/// A source that does not exist: the file itself, or a parent that is not a directory
fn is_missing(path: &Path, err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound || path.ancestors().skip(1).any(|a| a.is_file())
}

fn create_empty_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).write(true).open(path)?;
    Ok(())
}
