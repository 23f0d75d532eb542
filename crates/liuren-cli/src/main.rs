//! CLI frontend for Xiao Liu Ren (小六壬) divination.

mod commands;
mod config;
mod render;
mod session;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config::ShellConfig;

#[derive(Parser)]
#[command(
    name = "liuren",
    about = "小六壬: six-palace divination from a date and hour",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file replacing the built-in palace and hour tables
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast one reading and print it (default: now)
    Cast {
        /// Gregorian year
        year: Option<i32>,
        /// Month (1-12)
        month: Option<u32>,
        /// Day of month
        day: Option<u32>,
        /// Hour on the 24-hour clock (0-23)
        hour: Option<u32>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive prompt session (the default)
    Session {
        /// Show all palaces without waiting for Enter
        #[arg(long)]
        no_pause: bool,
    },

    /// Terminal form with editable date fields
    Form,

    /// List the six palaces and twelve double-hours
    Palaces,
}

fn init_tracing(with_output: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    // The form owns the terminal, so it gets the filter but no writer.
    if with_output {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    } else {
        registry.init();
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Session { no_pause: false });

    init_tracing(!matches!(command, Commands::Form));

    let config = ShellConfig::default()
        .with_tables_path(cli.tables)
        .with_color(!cli.no_color);
    config.apply_color();

    let result = match command {
        Commands::Cast {
            year,
            month,
            day,
            hour,
            json,
        } => commands::cast::run(&config, year, month, day, hour, json),
        Commands::Session { no_pause } => commands::session::run(&config.with_pause(!no_pause)),
        Commands::Form => commands::form::run(&config),
        Commands::Palaces => commands::palaces::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
