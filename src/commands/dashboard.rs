// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::session;
use crate::store::Store;
use crate::utils::{fmt_brl, maybe_print_json, pretty_table};

const RECENT: usize = 5;

#[derive(Serialize)]
struct DashboardSummary {
    balance: Decimal,
    total_income: Decimal,
    total_expenses: Decimal,
}

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let user = session::require_active(store)?;
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let expenses = store.load_expenses()?;
    let incomes = store.load_incomes()?;
    let summary = DashboardSummary {
        balance: aggregate::balance(&incomes, &expenses),
        total_income: aggregate::total_income(&incomes),
        total_expenses: aggregate::total_expenses(&expenses),
    };
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    println!("Hello, {}", user.name);
    println!(
        "{}",
        pretty_table(
            &["", "Total"],
            vec![
                vec!["Balance".to_string(), fmt_brl(&summary.balance)],
                vec!["Income".to_string(), fmt_brl(&summary.total_income)],
                vec!["Expenses".to_string(), fmt_brl(&summary.total_expenses)],
            ],
        )
    );

    if expenses.is_empty() {
        println!("\nNo expenses recorded.");
    } else {
        let rows: Vec<Vec<String>> = expenses
            .iter()
            .take(RECENT)
            .map(|e| {
                vec![
                    e.description.clone(),
                    e.category.to_string(),
                    fmt_brl(&e.amount),
                ]
            })
            .collect();
        println!("\nRecent expenses");
        println!(
            "{}",
            pretty_table(&["Description", "Category", "Amount"], rows)
        );
    }

    if incomes.is_empty() {
        println!("\nNo incomes recorded.");
    } else {
        let rows: Vec<Vec<String>> = incomes
            .iter()
            .take(RECENT)
            .map(|i| {
                vec![
                    i.description.clone(),
                    if i.is_extra { "extra" } else { "recurring" }.to_string(),
                    fmt_brl(&i.amount),
                ]
            })
            .collect();
        println!("\nRecent incomes");
        println!("{}", pretty_table(&["Description", "Type", "Amount"], rows));
    }
    Ok(())
}
