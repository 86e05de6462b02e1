// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use finanza::{cli, commands, store::Store};

fn main() -> Result<()> {
    init_logger();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = Store::open_or_init()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&store, sub)?,
        Some(("subscribe", sub)) => commands::auth::subscribe(&store, sub)?,
        Some(("logout", _)) => commands::auth::logout(&store)?,
        Some(("status", _)) => commands::auth::status(&store)?,
        Some(("expense", sub)) => commands::expenses::handle(&store, sub)?,
        Some(("income", sub)) => commands::incomes::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("chart", sub)) => commands::charts::handle(&store, sub)?,
        Some(("advisor", sub)) => commands::advisor::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn init_logger() {
    let filter = match std::env::var("RUST_LOG") {
        // RUST_LOG exists; use it.
        Ok(_) => EnvFilter::from_default_env(),
        // Default to warnings for this crate only.
        Err(_) => EnvFilter::new("finanza=warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
