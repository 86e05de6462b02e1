// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::models::Category;
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_brl, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    session::require_active(store)?;
    match m.subcommand() {
        Some(("categories", sub)) => categories(store, sub)?,
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct CategorySlice {
    category: Category,
    value: Decimal,
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let expenses = store.load_expenses()?;
    let grouped = aggregate::by_category(&expenses);

    let slices: Vec<CategorySlice> = grouped
        .iter()
        .map(|(category, value)| CategorySlice {
            category: *category,
            value: *value,
        })
        .collect();
    if maybe_print_json(json_flag, jsonl_flag, &slices)? {
        return Ok(());
    }

    if grouped.is_empty() {
        println!("No expense data yet.");
        return Ok(());
    }
    let total = aggregate::total_expenses(&expenses);
    let hundred = Decimal::from(100);
    let rows: Vec<Vec<String>> = grouped
        .iter()
        .map(|(category, value)| {
            let share = if total.is_zero() {
                Decimal::ZERO
            } else {
                (*value / total * hundred).round_dp(1)
            };
            vec![
                category.to_string(),
                fmt_brl(value),
                format!("{}%", share),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Share"], rows)
    );
    Ok(())
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let expenses = store.load_expenses()?;
    let incomes = store.load_incomes()?;
    let series = aggregate::income_vs_expense_series(&incomes, &expenses);

    if maybe_print_json(json_flag, jsonl_flag, &series)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|p| vec![p.label.to_string(), fmt_brl(&p.value)])
        .collect();
    println!("{}", pretty_table(&["Series", "Amount"], rows));
    Ok(())
}
