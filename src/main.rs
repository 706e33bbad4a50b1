// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `louvre` command line navigator.
//!
//! Keeps the learned map in a TOML preference file between invocations.
//!
//! ```text
//! louvre --prefs prefs.toml --epoch 17 choose 92 4
//! louvre --prefs prefs.toml --epoch 17 observe 92 1 97
//! louvre --prefs prefs.toml --epoch 17 page 92 1 page.html
//! louvre --prefs prefs.toml --epoch 17 export --url
//! ```

use clap::{Parser, Subcommand};
use louvre_nav::config::NavigatorConfig;
use louvre_nav::context::{NavError, Navigator};
use louvre_nav::feed::PageRecord;
use louvre_nav::store::TomlFileStore;
use louvre_nav::topology::{NodeId, NDECISIONS, NNODES};
use louvre_nav::Observed;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Learn and navigate the Louvre choice graph.
#[derive(Debug, Parser)]
#[command(name = "louvre")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Preference file holding the learned map
    #[arg(long)]
    prefs: PathBuf,

    /// Current epoch; a different epoch forgets the learned map
    #[arg(long)]
    epoch: u32,

    /// Optional navigator configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recommend an option at a node towards a goal
    Choose {
        node: i32,
        goal: i32,
        /// Use the fixed legacy routes instead of searching
        #[arg(long)]
        experienced: bool,
        /// Decisions already taken this trip (indexes override directives)
        #[arg(long, default_value_t = 0)]
        step: usize,
    },
    /// Record where an option led
    Observe {
        node: i32,
        /// 1 = Up, 2 = Down, 3 = Sideways
        decision: i32,
        destination: i32,
    },
    /// Record where an option led, reading the page it led to
    Page {
        node: i32,
        /// 1 = Up, 2 = Down, 3 = Sideways
        decision: i32,
        /// File holding the page text
        file: PathBuf,
    },
    /// Print the mapper code for the learned map
    Export {
        /// Print the full mapper link instead of the bare code
        #[arg(long)]
        url: bool,
    },
    /// Print what has been learned at every node
    Show,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("cannot read page {path}: {source}")]
    Page {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => NavigatorConfig::load_from_file(path).map_err(NavError::from)?,
        None => NavigatorConfig::default(),
    };
    let store = TomlFileStore::open(&cli.prefs).map_err(NavError::from)?;
    let mut nav = Navigator::open(store, config, cli.epoch)?;

    match cli.command {
        Commands::Choose {
            node,
            goal,
            experienced,
            step,
        } => match nav.choose(node, goal, experienced, step) {
            Some(route) => println!("{} ({})", route.decision, route.source),
            None => println!("could not determine a choice"),
        },
        Commands::Observe {
            node,
            decision,
            destination,
        } => match nav.observe_raw(node, decision, destination)? {
            Observed::AlreadyKnown => println!("already known"),
            Observed::Recorded { deduced: None } => println!("recorded"),
            Observed::Recorded {
                deduced: Some((decision, destination)),
            } => println!("recorded; deduced {decision} -> {destination}"),
        },
        Commands::Page {
            node,
            decision,
            file,
        } => {
            let text = fs::read_to_string(&file).map_err(|source| CliError::Page {
                path: file.clone(),
                source,
            })?;
            let record = nav.record_page(node, decision, &text)?;
            if record.handled() {
                println!("{record:?}");
            } else {
                println!("not handled: {record:?}");
            }
        }
        Commands::Export { url } => {
            if url {
                println!("{}", nav.mapper_url());
            } else {
                println!("{}", nav.map_code());
            }
        }
        Commands::Show => {
            for node in NodeId::all() {
                if let Some(spoilers) = nav.spoilers(node.value() as i32) {
                    println!("{node} {}", spoilers.name);
                    for (slot, option) in spoilers.options.iter().enumerate() {
                        let label = if option.is_empty() { "?" } else { *option };
                        println!("  {}: {label}", slot + 1);
                    }
                }
            }
            println!("{} of {} exits known", nav.map().known_count(), NNODES * NDECISIONS);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
