// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::forms::{self, IncomeDraft};
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_brl, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    session::require_active(store)?;
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let draft = IncomeDraft {
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: sub.get_one::<String>("amount").unwrap().clone(),
        is_extra: sub.get_flag("extra"),
    };
    let income = forms::submit_income(&draft)?;

    let mut incomes = store.load_incomes()?;
    incomes.insert(0, income.clone());
    store.save_incomes(&incomes)?;

    println!(
        "Recorded {} income '{}' for {}",
        if income.is_extra { "extra" } else { "recurring" },
        income.description,
        fmt_brl(&income.amount)
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let incomes = store.load_incomes()?;
    if !maybe_print_json(json_flag, jsonl_flag, &incomes)? {
        let rows: Vec<Vec<String>> = incomes
            .iter()
            .map(|i| {
                vec![
                    i.date.format("%Y-%m-%d").to_string(),
                    i.description.clone(),
                    if i.is_extra { "extra" } else { "recurring" }.to_string(),
                    fmt_brl(&i.amount),
                    i.id.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Type", "Amount", "Id"], rows)
        );
    }
    Ok(())
}

fn delete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("id").unwrap();
    let id: Uuid = raw
        .parse()
        .with_context(|| format!("Invalid id '{}'", raw))?;
    let mut incomes = store.load_incomes()?;
    let before = incomes.len();
    incomes.retain(|i| i.id != id);
    if incomes.len() == before {
        println!("No income with id {}", id);
    } else {
        store.save_incomes(&incomes)?;
        println!("Deleted income {}", id);
    }
    Ok(())
}
