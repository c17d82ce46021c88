//! Roster CLI
//!
//! Command-line interface for managing the employee roster file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roster::config::DEFAULT_ROSTER_PATH;
use roster::{Command, Config, Employee, EmployeeId, Field, Result, RosterStore};
use tracing_subscriber::{fmt, EnvFilter};

/// Roster CLI
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Manage a file-backed employee roster")]
#[command(version)]
struct Args {
    /// Roster file
    #[arg(short, long, default_value = DEFAULT_ROSTER_PATH)]
    file: PathBuf,

    /// Skip fsync after saving
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an employee
    Add {
        #[arg(long)]
        id: EmployeeId,

        #[arg(long)]
        name: String,

        #[arg(long)]
        dept: String,

        #[arg(long)]
        salary: i64,
    },

    /// Remove an employee by id
    Remove {
        /// The id to remove
        id: EmployeeId,
    },

    /// Update a field of an employee
    Update {
        /// The id to update
        id: EmployeeId,

        /// One of: name, dept, salary
        field: String,

        /// The new value
        value: String,
    },

    /// List all employees
    List,

    /// List all departments
    Departments,

    /// List the employees of a department
    Dept {
        /// Department name (exact match)
        name: String,
    },

    /// Run the demonstration sequence
    Demo,
}

fn main() {
    // Logs go to stderr; stdout carries the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,roster=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Roster v{}", roster::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder()
        .roster_path(&args.file)
        .sync_on_save(!args.no_sync)
        .build();

    let mut store = RosterStore::open(config)?;

    let command = match args.command {
        Commands::Demo => return run_demo(store),
        Commands::Add {
            id,
            name,
            dept,
            salary,
        } => Command::Add {
            employee: Employee::new(id, name, dept, salary),
        },
        Commands::Remove { id } => Command::Remove { id },
        Commands::Update { id, field, value } => match field.parse::<Field>() {
            Ok(field) => Command::Update { id, field, value },
            Err(e) => {
                println!("{}", e);
                return Ok(());
            }
        },
        Commands::List => Command::List,
        Commands::Departments => Command::ListDepartments,
        Commands::Dept { name } => Command::EmployeesInDept { dept: name },
    };

    let mutation = command.is_mutation();
    match store.execute(command) {
        Ok(outcome) => {
            println!("{}", outcome);
            if mutation {
                store.save()?;
            }
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Print the outcome of a roster operation; recoverable failures are only reported
fn report<T>(result: Result<T>, on_success: impl FnOnce(T) -> String) -> Result<()> {
    match result {
        Ok(value) => {
            println!("{}", on_success(value));
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn run_demo(mut store: RosterStore) -> Result<()> {
    // Starting employees; on later runs these report duplicates
    for (name, dept, salary, id) in [
        ("Foo Bar", "IT", 100000, 1),
        ("John Doe", "Finance", 50000, 2),
        ("Jane Doe", "HR", 75000, 3),
    ] {
        report(store.add(name, dept, salary, id), |_| {
            format!("Employee {} has been added!", name)
        })?;
    }

    println!("employees = {}", roster::Outcome::Employees(store.employees().to_vec()));

    report(store.remove(4), |e| format!("Employee ID:{} was removed!", e.id))?;

    println!("all departments = [{}]", store.list_departments().join(", "));

    report(store.add("Foo Bar #2", "IT", 120000, 4), |_| {
        "Employee Foo Bar #2 has been added!".to_string()
    })?;

    println!(
        "all employees in IT = {}",
        roster::Outcome::Employees(store.employees_in_dept("IT"))
    );

    report(store.remove(4), |e| format!("Employee ID:{} was removed!", e.id))?;

    report(store.update(2, Field::Name, "Jonathon Doe"), |e| e.to_string())?;
    report(store.update(2, Field::Salary, "100"), |e| e.to_string())?;

    println!("employees = {}", roster::Outcome::Employees(store.employees().to_vec()));

    report(store.update(2, Field::Name, "John Doe"), |e| e.to_string())?;
    report(store.update(2, Field::Salary, "50000"), |e| e.to_string())?;

    store.close()
}
