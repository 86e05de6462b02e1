// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::warn;

use crate::advice::{AdviceClient, AdviceError, API_KEY_VAR};
use crate::models::{Advice, FinancialData};
use crate::session;
use crate::store::Store;

const MODEL_SETTING: &str = "advisor_model";

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", _)) => get(store)?,
        Some(("set-model", sub)) => set_model(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn get(store: &Store) -> Result<()> {
    session::require_active(store)?;
    let expenses = store.load_expenses()?;
    let incomes = store.load_incomes()?;
    let data = FinancialData::snapshot(&expenses, &incomes);

    let client = match AdviceClient::from_env(store.get_setting(MODEL_SETTING)?) {
        Ok(client) => client,
        Err(AdviceError::MissingApiKey) => {
            println!("{} is not set; export it to use the assistant.", API_KEY_VAR);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!("Consulting the assistant...");
    match client.request_advice(&data) {
        Ok(advice) => print_advice(&advice),
        Err(err) => {
            // Network errors, empty replies and malformed payloads all
            // collapse into one user-facing message.
            warn!(error = %err, "advice request failed");
            println!("The assistant is unavailable right now. Try again in a moment.");
        }
    }
    Ok(())
}

fn print_advice(advice: &Advice) {
    println!("\nFinancial health");
    println!("  {}", advice.health_summary);
    println!("\nTips");
    for (i, tip) in advice.tips.iter().enumerate() {
        println!("  {}. {}", i + 1, tip);
    }
    println!("\nSpending alert");
    println!("  {}", advice.spending_alert);
}

fn set_model(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let model = sub.get_one::<String>("model").unwrap();
    store.set_setting(MODEL_SETTING, model)?;
    println!("Assistant model set to {}", model);
    Ok(())
}
