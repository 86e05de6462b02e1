// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::forms::{self, ExpenseDraft};
use crate::models::{Category, PaymentKind};
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
    let draft = ExpenseDraft {
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: sub.get_one::<String>("amount").unwrap().clone(),
        category: sub
            .get_one::<String>("category")
            .unwrap()
            .parse::<Category>()
            .map_err(anyhow::Error::msg)?,
        kind: sub
            .get_one::<String>("kind")
            .unwrap()
            .parse::<PaymentKind>()
            .map_err(anyhow::Error::msg)?,
        installments: sub.get_one::<String>("installments").cloned(),
    };
    let expense = forms::submit_expense(&draft)?;

    // Newest entries go to the front; the whole collection is rewritten.
    let mut expenses = store.load_expenses()?;
    expenses.insert(0, expense.clone());
    store.save_expenses(&expenses)?;

    println!(
        "Recorded expense '{}' for {} ({})",
        expense.description,
        fmt_brl(&expense.amount),
        expense.category
    );
    if let (Some(total), Some(current)) = (expense.installments, expense.current_installment) {
        println!("Installment {}/{}", current, total);
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let expenses = store.load_expenses()?;
    if !maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        let rows: Vec<Vec<String>> = expenses
            .iter()
            .map(|e| {
                let kind = match (e.installments, e.current_installment) {
                    (Some(total), Some(current)) => {
                        format!("{} ({}/{})", e.kind, current, total)
                    }
                    _ => e.kind.to_string(),
                };
                vec![
                    e.date.format("%Y-%m-%d").to_string(),
                    e.description.clone(),
                    e.category.to_string(),
                    kind,
                    fmt_brl(&e.amount),
                    e.id.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Kind", "Amount", "Id"],
                rows
            )
        );
    }
    Ok(())
}

fn delete(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("id").unwrap();
    let id: Uuid = raw
        .parse()
        .with_context(|| format!("Invalid id '{}'", raw))?;
    let mut expenses = store.load_expenses()?;
    let before = expenses.len();
    expenses.retain(|e| e.id != id);
    if expenses.len() == before {
        println!("No expense with id {}", id);
    } else {
        store.save_expenses(&expenses)?;
        println!("Deleted expense {}", id);
    }
    Ok(())
}
