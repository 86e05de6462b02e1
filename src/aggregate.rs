// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Expense, Income};

pub fn total_income(incomes: &[Income]) -> Decimal {
    incomes.iter().map(|i| i.amount).sum()
}

pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Income minus expenses; negative when spending outpaces earnings.
pub fn balance(incomes: &[Income], expenses: &[Expense]) -> Decimal {
    total_income(incomes) - total_expenses(expenses)
}

/// Per-category expense sums, ordered by first occurrence of each category in
/// the input. Categories with no expenses are omitted.
pub fn by_category(expenses: &[Expense]) -> Vec<(Category, Decimal)> {
    let mut out: Vec<(Category, Decimal)> = Vec::new();
    for e in expenses {
        match out.iter_mut().find(|(c, _)| *c == e.category) {
            Some((_, total)) => *total += e.amount,
            None => out.push((e.category, e.amount)),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: Decimal,
}

/// Two-point summary series for the income-vs-expense chart. Always exactly
/// [income, expense] in that order, zeros included.
pub fn income_vs_expense_series(incomes: &[Income], expenses: &[Expense]) -> [SeriesPoint; 2] {
    [
        SeriesPoint {
            label: "income",
            value: total_income(incomes),
        },
        SeriesPoint {
            label: "expense",
            value: total_expenses(expenses),
        },
    ]
}
