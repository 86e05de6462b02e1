// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use finanza::forms::{submit_expense, submit_income, ExpenseDraft, FormError, IncomeDraft};
use finanza::models::{Category, PaymentKind};

fn valid_expense_draft() -> ExpenseDraft {
    ExpenseDraft {
        description: "Groceries".to_string(),
        amount: "123.45".to_string(),
        category: Category::Food,
        kind: PaymentKind::Single,
        installments: None,
    }
}

#[test]
fn expense_happy_path() {
    let expense = submit_expense(&valid_expense_draft()).unwrap();
    assert_eq!(expense.description, "Groceries");
    assert_eq!(expense.amount, "123.45".parse::<Decimal>().unwrap());
    assert_eq!(expense.category, Category::Food);
    assert_eq!(expense.kind, PaymentKind::Single);
    assert_eq!(expense.installments, None);
    assert_eq!(expense.current_installment, None);
}

#[test]
fn expense_ids_are_unique() {
    let a = submit_expense(&valid_expense_draft()).unwrap();
    let b = submit_expense(&valid_expense_draft()).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn empty_description_is_rejected() {
    let mut draft = valid_expense_draft();
    draft.description = "".to_string();
    assert_eq!(submit_expense(&draft), Err(FormError::EmptyDescription));

    draft.description = "   ".to_string();
    assert_eq!(submit_expense(&draft), Err(FormError::EmptyDescription));
}

#[test]
fn description_is_trimmed() {
    let mut draft = valid_expense_draft();
    draft.description = "  Groceries  ".to_string();
    assert_eq!(submit_expense(&draft).unwrap().description, "Groceries");
}

#[test]
fn bad_amounts_are_rejected() {
    let mut draft = valid_expense_draft();

    draft.amount = "abc".to_string();
    assert_eq!(
        submit_expense(&draft),
        Err(FormError::InvalidAmount("abc".to_string()))
    );

    draft.amount = "0".to_string();
    assert_eq!(submit_expense(&draft), Err(FormError::NonPositiveAmount));

    draft.amount = "-5".to_string();
    assert_eq!(submit_expense(&draft), Err(FormError::NonPositiveAmount));
}

#[test]
fn installments_produce_count_and_first_position() {
    let mut draft = valid_expense_draft();
    draft.kind = PaymentKind::Installments;
    draft.installments = Some("5".to_string());

    let expense = submit_expense(&draft).unwrap();
    assert_eq!(expense.installments, Some(5));
    assert_eq!(expense.current_installment, Some(1));
}

#[test]
fn non_installment_kinds_drop_installment_fields() {
    let mut draft = valid_expense_draft();
    draft.kind = PaymentKind::Monthly;
    draft.installments = Some("5".to_string());

    let expense = submit_expense(&draft).unwrap();
    assert_eq!(expense.installments, None);
    assert_eq!(expense.current_installment, None);
}

#[test]
fn installment_count_is_validated() {
    let mut draft = valid_expense_draft();
    draft.kind = PaymentKind::Installments;

    draft.installments = None;
    assert_eq!(submit_expense(&draft), Err(FormError::MissingInstallments));

    draft.installments = Some("1".to_string());
    assert_eq!(submit_expense(&draft), Err(FormError::TooFewInstallments));

    draft.installments = Some("two".to_string());
    assert_eq!(
        submit_expense(&draft),
        Err(FormError::InvalidInstallments("two".to_string()))
    );
}

#[test]
fn income_happy_path_carries_extra_flag() {
    let income = submit_income(&IncomeDraft {
        description: "Bonus".to_string(),
        amount: "250.00".to_string(),
        is_extra: true,
    })
    .unwrap();
    assert_eq!(income.description, "Bonus");
    assert_eq!(income.amount, "250.00".parse::<Decimal>().unwrap());
    assert!(income.is_extra);
}

#[test]
fn income_validation_mirrors_expense_rules() {
    let draft = IncomeDraft {
        description: "".to_string(),
        amount: "100".to_string(),
        is_extra: false,
    };
    assert_eq!(submit_income(&draft), Err(FormError::EmptyDescription));

    let draft = IncomeDraft {
        description: "Salary".to_string(),
        amount: "not-a-number".to_string(),
        is_extra: false,
    };
    assert_eq!(
        submit_income(&draft),
        Err(FormError::InvalidAmount("not-a-number".to_string()))
    );
}
