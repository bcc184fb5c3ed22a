//! Atrium CLI — inspect the route table and preview access decisions.
//!
//! Lets operators answer "what will this user see" without opening the
//! shell: dump the route declaration, render the menu a profile would
//! get, or run a single capability-gate check.
//!
//! # Logging
//!
//! Diagnostics go to stderr via `tracing`; set `RUST_LOG` to adjust
//! (e.g. `RUST_LOG=atrium_access=debug`).

use anyhow::{Context, Result};
use atrium_access::{derive_access, CurrentUser, SessionContext};
use atrium_nav::{admin_routes, build_menu, MenuItem};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inspect Atrium navigation and access decisions.
#[derive(Parser, Debug)]
#[command(name = "atrium")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the route table as JSON.
    Routes {
        /// Include ungated shell pages (login, redirects, catch-all).
        #[arg(long)]
        all: bool,
    },
    /// Render the menu a user profile would see.
    Menu {
        /// Path to a user profile JSON file.
        #[arg(short, long)]
        user: PathBuf,
        /// Print as an indented tree instead of JSON.
        #[arg(long)]
        tree: bool,
    },
    /// Check whether a profile holds a capability. Exits non-zero if not.
    Check {
        /// The capability code, e.g. "lead:my".
        capability: String,
        /// Path to a user profile JSON file; omit for the anonymous session.
        #[arg(short, long)]
        user: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Routes { all } => print_routes(all),
        Command::Menu { user, tree } => print_menu(&user, tree),
        Command::Check { capability, user } => check(&capability, user.as_deref()),
    }
}

fn load_user(path: &Path) -> Result<CurrentUser> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading user profile {}", path.display()))?;
    let user: CurrentUser = serde_json::from_str(&raw)
        .with_context(|| format!("parsing user profile {}", path.display()))?;
    info!(user = %user.name, permissions = user.permissions.len(), "profile loaded");
    Ok(user)
}

fn print_routes(all: bool) -> Result<()> {
    let table = admin_routes();
    let json = if all {
        serde_json::to_string_pretty(table.routes())?
    } else {
        serde_json::to_string_pretty(&table.filtered())?
    };
    println!("{json}");
    Ok(())
}

fn print_menu(user_path: &Path, tree: bool) -> Result<()> {
    let user = load_user(user_path)?;

    let mut ctx = SessionContext::new();
    ctx.set_session(user);

    let menu = build_menu(&admin_routes().filtered(), ctx.capabilities());
    if tree {
        print_tree(&menu, 0);
    } else {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    }
    Ok(())
}

fn print_tree(items: &[MenuItem], depth: usize) {
    for item in items {
        println!("{:indent$}{}  {}", "", item.label, item.path, indent = depth * 2);
        print_tree(&item.children, depth + 1);
    }
}

fn check(capability: &str, user_path: Option<&Path>) -> Result<()> {
    let user = user_path.map(load_user).transpose()?;
    let caps = derive_access(user.as_ref());

    if caps.contains(capability) {
        println!("granted: {capability}");
        Ok(())
    } else {
        println!("denied: {capability}");
        std::process::exit(1);
    }
}
