// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use finanza::aggregate::{balance, by_category, income_vs_expense_series, total_expenses, total_income};
use finanza::models::{Category, Expense, Income, PaymentKind};

fn expense(description: &str, amount: &str, category: Category) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount: amount.parse().unwrap(),
        category,
        kind: PaymentKind::Single,
        installments: None,
        current_installment: None,
        date: Utc::now(),
    }
}

fn income(description: &str, amount: &str) -> Income {
    Income {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount: amount.parse().unwrap(),
        date: Utc::now(),
        is_extra: false,
    }
}

#[test]
fn totals_are_zero_for_empty_collections() {
    assert_eq!(total_income(&[]), Decimal::ZERO);
    assert_eq!(total_expenses(&[]), Decimal::ZERO);
    assert_eq!(balance(&[], &[]), Decimal::ZERO);
}

#[test]
fn worked_example() {
    let incomes = vec![income("Salary", "1000")];
    let expenses = vec![
        expense("Groceries", "300", Category::Food),
        expense("Restaurant", "200", Category::Food),
    ];

    assert_eq!(total_income(&incomes), "1000".parse::<Decimal>().unwrap());
    assert_eq!(total_expenses(&expenses), "500".parse::<Decimal>().unwrap());
    assert_eq!(
        balance(&incomes, &expenses),
        "500".parse::<Decimal>().unwrap()
    );
    assert_eq!(
        by_category(&expenses),
        vec![(Category::Food, "500".parse::<Decimal>().unwrap())]
    );
}

#[test]
fn balance_can_go_negative() {
    let incomes = vec![income("Freelance", "100.50")];
    let expenses = vec![expense("Rent", "900", Category::Housing)];
    assert_eq!(
        balance(&incomes, &expenses),
        "-799.50".parse::<Decimal>().unwrap()
    );
}

#[test]
fn by_category_follows_first_occurrence_order() {
    let expenses = vec![
        expense("Lunch", "10", Category::Food),
        expense("Bus", "5", Category::Transport),
        expense("Dinner", "20", Category::Food),
        expense("Rent", "800", Category::Housing),
    ];
    let grouped = by_category(&expenses);
    let order: Vec<Category> = grouped.iter().map(|(c, _)| *c).collect();
    assert_eq!(
        order,
        vec![Category::Food, Category::Transport, Category::Housing]
    );
    assert_eq!(grouped[0].1, "30".parse::<Decimal>().unwrap());
}

#[test]
fn by_category_has_no_duplicates_and_preserves_total() {
    let expenses = vec![
        expense("a", "1.10", Category::Food),
        expense("b", "2.20", Category::Shopping),
        expense("c", "3.30", Category::Food),
        expense("d", "4.40", Category::Other),
        expense("e", "5.50", Category::Shopping),
    ];
    let grouped = by_category(&expenses);

    for (i, (category, _)) in grouped.iter().enumerate() {
        assert!(!grouped[..i].iter().any(|(seen, _)| seen == category));
    }

    let sum: Decimal = grouped.iter().map(|(_, v)| *v).sum();
    assert_eq!(sum, total_expenses(&expenses));
}

#[test]
fn series_always_has_two_points_in_fixed_order() {
    let series = income_vs_expense_series(&[], &[]);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "income");
    assert_eq!(series[1].label, "expense");
    assert_eq!(series[0].value, Decimal::ZERO);
    assert_eq!(series[1].value, Decimal::ZERO);

    let incomes = vec![income("Salary", "1500")];
    let expenses = vec![expense("Market", "250", Category::Food)];
    let series = income_vs_expense_series(&incomes, &expenses);
    assert_eq!(series[0].value, "1500".parse::<Decimal>().unwrap());
    assert_eq!(series[1].value, "250".parse::<Decimal>().unwrap());
}
