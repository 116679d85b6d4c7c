//! Garden Timekeeper - Main Entry Point
//!
//! Command-line front end for the `garden_timekeeper` library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use garden_timekeeper::garden::local_date_today;
use garden_timekeeper::{Config, GardenService, NewTask, TaskUpdate, validation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Garden Timekeeper - seasonal scheduling for garden maintenance tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the task data file (overrides the config file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    /// Load unreadable frequency codes as every 7 days
    #[arg(long)]
    legacy_frequency: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new task
    Add {
        /// What to do, e.g. "Water"
        name: String,
        /// Repeat interval: number followed by d (days) or m (months)
        #[arg(short = 'q', long)]
        frequency: String,
        /// First month of the season (1-12); omit for all year
        #[arg(long, requires = "end_month")]
        start_month: Option<u32>,
        /// Last month of the season (1-12)
        #[arg(long, requires = "start_month")]
        end_month: Option<u32>,
        /// Complete once, then deactivate
        #[arg(long)]
        once: bool,
        /// Explicit task ID
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        plant: Option<String>,
        #[arg(long)]
        bed: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Change the details of a task
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// New repeat interval, e.g. 14d or 2m
        #[arg(short = 'q', long)]
        frequency: Option<String>,
        #[arg(long, requires = "end_month", conflicts_with = "all_year")]
        start_month: Option<u32>,
        #[arg(long, requires = "start_month", conflicts_with = "all_year")]
        end_month: Option<u32>,
        /// Remove the seasonal window
        #[arg(long)]
        all_year: bool,
        /// true for a recurring task, false for a one-off
        #[arg(long)]
        repeat: Option<bool>,
        /// Empty string clears
        #[arg(long)]
        plant: Option<String>,
        /// Empty string clears
        #[arg(long)]
        bed: Option<String>,
        /// Empty string clears
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark tasks as done
    Done {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Completion date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Skip the current occurrence of tasks
    Skip {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// List tasks
    List {
        /// all, active, inactive, overdue or upcoming
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        plant: Option<String>,
        #[arg(long)]
        bed: Option<String>,
        #[arg(long)]
        no_notes: bool,
    },
    /// Show tasks due in a month
    Calendar {
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        year: Option<String>,
    },
    /// Delete a task
    Remove { id: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("garden_timekeeper=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let Some(command) = args.command else {
        // No subcommand, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    };

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(file) = args.file {
        config.data_file = file;
    }
    if args.legacy_frequency {
        config.legacy_frequency_fallback = true;
    }

    let today: NaiveDate = match args.today {
        Some(ref s) => validation::parse_date(s)?,
        None => local_date_today(),
    };
    tracing::debug!(%today, file = %config.data_file.display(), "starting");

    let mut service = GardenService::new(config)?;

    let output = match command {
        Command::Add {
            name,
            frequency,
            start_month,
            end_month,
            once,
            id,
            plant,
            bed,
            notes,
        } => service.add(
            NewTask {
                id,
                name,
                frequency,
                start_month,
                end_month,
                repeat: !once,
                plant,
                bed,
                notes,
            },
            today,
        )?,
        Command::Update {
            id,
            name,
            frequency,
            start_month,
            end_month,
            all_year,
            repeat,
            plant,
            bed,
            notes,
        } => service.update(
            &id,
            TaskUpdate {
                name,
                frequency,
                start_month,
                end_month,
                all_year,
                repeat,
                plant,
                bed,
                notes,
            },
            today,
        )?,
        Command::Done { ids, date } => service.mark_done(ids, date, today)?,
        Command::Skip { ids } => service.skip(ids, today)?,
        Command::List {
            filter,
            keyword,
            plant,
            bed,
            no_notes,
        } => service.list(filter, keyword, plant, bed, no_notes, today)?,
        Command::Calendar { month, year } => {
            service.calendar(month.as_deref(), year.as_deref(), today)
        }
        Command::Remove { id } => service.remove(&id)?,
    };

    println!("{}", output);
    Ok(())
}
