// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Category, Expense, Income, PaymentKind};

pub const MIN_INSTALLMENTS: u32 = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("description must not be empty")]
    EmptyDescription,

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("installment count is required for installment purchases")]
    MissingInstallments,

    #[error("invalid installment count '{0}'")]
    InvalidInstallments(String),

    #[error("installment purchases need at least {} installments", MIN_INSTALLMENTS)]
    TooFewInstallments,
}

/// Raw expense-form input, as typed. Amounts and counts stay strings until
/// validation so a rejected submission has no side effects at all.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: Category,
    pub kind: PaymentKind,
    pub installments: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct IncomeDraft {
    pub description: String,
    pub amount: String,
    pub is_extra: bool,
}

/// Validates the draft and produces a fully-formed expense: fresh id, current
/// timestamp, and for installment purchases the parsed count with the current
/// installment fixed at 1. Non-installment kinds never carry installment
/// fields, whatever the draft says.
pub fn submit_expense(draft: &ExpenseDraft) -> Result<Expense, FormError> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(FormError::EmptyDescription);
    }
    let amount = parse_amount(&draft.amount)?;

    let (installments, current_installment) = match draft.kind {
        PaymentKind::Installments => {
            let raw = draft
                .installments
                .as_deref()
                .ok_or(FormError::MissingInstallments)?;
            let count: u32 = raw
                .trim()
                .parse()
                .map_err(|_| FormError::InvalidInstallments(raw.to_string()))?;
            if count < MIN_INSTALLMENTS {
                return Err(FormError::TooFewInstallments);
            }
            (Some(count), Some(1))
        }
        _ => (None, None),
    };

    Ok(Expense {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount,
        category: draft.category,
        kind: draft.kind,
        installments,
        current_installment,
        date: Utc::now(),
    })
}

pub fn submit_income(draft: &IncomeDraft) -> Result<Income, FormError> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(FormError::EmptyDescription);
    }
    let amount = parse_amount(&draft.amount)?;

    Ok(Income {
        id: Uuid::new_v4(),
        description: description.to_string(),
        amount,
        date: Utc::now(),
        is_extra: draft.is_extra,
    })
}

fn parse_amount(raw: &str) -> Result<Decimal, FormError> {
    let amount: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(FormError::NonPositiveAmount);
    }
    Ok(amount)
}
