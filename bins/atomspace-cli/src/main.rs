// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `atomspace`: command line front end for the AtomSpace interpreter.
//!
//! Runs an interactive Scheme-style REPL, executes expressions in batch,
//! checks expression balance and exports the graph projection as JSON.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod interactive;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use atomspace_app_core::config::ConfigService;
use atomspace_app_core::prefs::ReplPrefs;
use atomspace_config_fs::FsConfigStore;
use atomspace_repl::{execute, is_balanced, ReplState};
use atomspace_store::{project_to_graph, query, Atom, TruthValue};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "AtomSpace Scheme-style REPL")]
struct Args {
    /// Start from a JSON array of atoms instead of the sample taxonomy
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,
    /// Directory holding `repl.json` (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Interactive loop on stdin (the default)
    Repl,
    /// Execute expressions in order against one session
    Run {
        /// Expressions, e.g. '(Concept "Zebra")'
        #[arg(required = true)]
        exprs: Vec<String>,
    },
    /// Report whether an expression is structurally balanced
    Check {
        /// Expression to check
        expr: String,
    },
    /// Execute expressions, then print the graph projection as JSON
    Graph {
        /// Case-insensitive substring of name or type
        #[arg(long, default_value = "")]
        search: String,
        /// Exact atom type to keep
        #[arg(long = "type")]
        atom_type: Option<String>,
        /// Expressions to run before projecting
        exprs: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut state = match &args.snapshot {
        Some(path) => ReplState::from_snapshot(load_snapshot(path)?),
        None => ReplState::new(),
    };

    match args.cmd.unwrap_or(Cmd::Repl) {
        Cmd::Repl => {
            let prefs = load_prefs(args.config_dir.as_deref());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            interactive::run(stdin.lock(), &mut stdout, &mut state, &prefs)?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Run { exprs } => Ok(run_batch(&exprs, &mut state)),
        Cmd::Check { expr } => {
            if is_balanced(&expr) {
                println!("balanced");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("unbalanced");
                Ok(ExitCode::FAILURE)
            }
        }
        Cmd::Graph {
            search,
            atom_type,
            exprs,
        } => {
            let code = run_quiet(&exprs, &mut state);
            let kept: Vec<Atom> = query::filter(state.atoms(), &search, atom_type.as_deref())
                .into_iter()
                .cloned()
                .collect();
            let graph = project_to_graph(&kept);
            println!("{}", serde_json::to_string_pretty(&graph)?);
            Ok(code)
        }
    }
}

fn load_snapshot(path: &Path) -> Result<Vec<Atom>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let atoms: Vec<Atom> = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    for atom in &atoms {
        if let Some(tv) = atom.tv {
            TruthValue::checked(tv.strength, tv.confidence).with_context(|| {
                format!("snapshot {}: atom {} has an invalid truth value", path.display(), atom.id)
            })?;
        }
    }
    debug!(atoms = atoms.len(), path = %path.display(), "snapshot loaded");
    Ok(atoms)
}

/// Prefs are best-effort: any config failure falls back to the defaults.
fn load_prefs(config_dir: Option<&Path>) -> ReplPrefs {
    let store = match config_dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    };
    let config = match store {
        Ok(store) => ConfigService::new(store),
        Err(err) => {
            warn!(%err, "config store unavailable; using default prefs");
            return ReplPrefs::default();
        }
    };
    config
        .load_or_init::<ReplPrefs>(ReplPrefs::KEY)
        .unwrap_or_else(|err| {
            warn!(%err, "could not load repl prefs; using defaults");
            ReplPrefs::default()
        })
}

fn run_batch(exprs: &[String], state: &mut ReplState) -> ExitCode {
    let mut failed = false;
    for expr in exprs {
        let result = execute(expr, state);
        if result.success {
            println!("{}", result.output);
        } else {
            failed = true;
            eprintln!("{}", result.output);
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// Output would corrupt the JSON on stdout, so only failures are reported.
fn run_quiet(exprs: &[String], state: &mut ReplState) -> ExitCode {
    let mut code = ExitCode::SUCCESS;
    for expr in exprs {
        let result = execute(expr, state);
        if !result.success {
            eprintln!("{}", result.output);
            code = ExitCode::FAILURE;
        }
    }
    code
}
