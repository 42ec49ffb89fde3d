//! Command-line front end over `multitool_core`.
//!
//! # Responsibility
//! - Drive the to-do list stored in a SQLite file.
//! - Expose a few stateless widgets (BMI, unit conversion, passwords).
//! - Keep output plain text so it can be piped.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use multitool_core::calc::bmi::{compute_bmi, BmiUnits};
use multitool_core::calc::convert::{convert_units, UnitCategory};
use multitool_core::generate::password::{generate_password, password_strength, PasswordOptions};
use multitool_core::service::todo_service::{TodoFilter, TodoService};
use multitool_core::{open_db, KeyValueStore, RandomSource, SqliteStore};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "multitool", version, about = "Everyday utility widgets")]
struct Cli {
    /// SQLite file holding persisted lists
    #[arg(long, global = true, default_value = "multitool.db")]
    db: PathBuf,

    /// Write rolling logs into this absolute directory
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the to-do list
    Todo {
        #[command(subcommand)]
        command: TodoCommand,
    },
    /// Body mass index from weight and height
    Bmi {
        /// Kilograms, or pounds with --imperial
        weight: f64,
        /// Centimeters, or inches with --imperial
        height: f64,
        #[arg(long)]
        imperial: bool,
    },
    /// Convert a value between two units
    Convert {
        #[arg(value_enum)]
        category: CategoryArg,
        value: f64,
        from: String,
        to: String,
    },
    /// Generate a random password
    Password {
        #[arg(long, default_value_t = 12)]
        length: usize,
        #[arg(long)]
        symbols: bool,
    },
}

#[derive(Subcommand, Debug)]
enum TodoCommand {
    Add { text: String },
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    Toggle { id: String },
    Remove { id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TodoFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Active => Self::Active,
            FilterArg::Completed => Self::Completed,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum CategoryArg {
    Length,
    Weight,
    Temperature,
    Area,
}

impl From<CategoryArg> for UnitCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Length => Self::Length,
            CategoryArg::Weight => Self::Weight,
            CategoryArg::Temperature => Self::Temperature,
            CategoryArg::Area => Self::Area,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(log_dir) = &cli.log_dir {
        multitool_core::init_logging(multitool_core::default_log_level(), log_dir)
            .map_err(anyhow::Error::msg)?;
    }

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Todo { command } => {
            let conn = open_db(&cli.db)
                .with_context(|| format!("failed to open database {}", cli.db.display()))?;
            run_todo(command, SqliteStore::new(&conn), &mut out)
        }
        command => run_widget(command, &mut rand::thread_rng(), &mut out),
    }
}

fn run_todo<S: KeyValueStore>(
    command: TodoCommand,
    store: S,
    out: &mut impl Write,
) -> Result<()> {
    let todos = TodoService::new(store);
    match command {
        TodoCommand::Add { text } => {
            let todo = todos.add(text)?;
            writeln!(out, "added {}", todo.id)?;
        }
        TodoCommand::List { filter } => {
            for todo in todos.list(filter.into())? {
                let mark = if todo.completed { 'x' } else { ' ' };
                writeln!(out, "[{mark}] {} {}", todo.id, todo.text)?;
            }
            let counts = todos.counts()?;
            writeln!(
                out,
                "{} total, {} active, {} completed",
                counts.total, counts.active, counts.completed
            )?;
        }
        TodoCommand::Toggle { id } => {
            let todo = todos.toggle(&id)?;
            let state = if todo.completed { "done" } else { "open" };
            writeln!(out, "{} {state}", todo.id)?;
        }
        TodoCommand::Remove { id } => {
            todos.remove(&id)?;
            writeln!(out, "removed {id}")?;
        }
    }
    Ok(())
}

fn run_widget<R: RandomSource>(
    command: Commands,
    rng: &mut R,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Commands::Bmi {
            weight,
            height,
            imperial,
        } => {
            let units = if imperial {
                BmiUnits::Imperial
            } else {
                BmiUnits::Metric
            };
            let bmi = compute_bmi(weight, height, units)
                .context("weight and height must be positive")?;
            writeln!(out, "{:.1} {}", bmi.value, bmi.category.label())?;
        }
        Commands::Convert {
            category,
            value,
            from,
            to,
        } => {
            let converted = convert_units(category.into(), value, &from, &to)?;
            writeln!(out, "{converted} {to}")?;
        }
        Commands::Password { length, symbols } => {
            let options = PasswordOptions {
                length,
                symbols,
                ..PasswordOptions::default()
            };
            let password = generate_password(&options, rng)?;
            let strength = password_strength(&password, &options)
                .map(|strength| strength.label())
                .unwrap_or_default();
            writeln!(out, "{password} ({strength})")?;
        }
        Commands::Todo { command } => {
            anyhow::bail!("todo command {command:?} needs a store");
        }
    }
    Ok(())
}
