// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed spending categories; entries outside this set do not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Housing,
    Entertainment,
    Health,
    Education,
    Shopping,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Education => "education",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "housing" => Ok(Self::Housing),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "education" => Ok(Self::Education),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How an expense is paid for. Installment purchases carry a count and a
/// position; the other kinds carry neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentKind {
    #[default]
    Single,
    Monthly,
    Installments,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 3] = [
        PaymentKind::Single,
        PaymentKind::Monthly,
        PaymentKind::Installments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Monthly => "monthly",
            Self::Installments => "installments",
        }
    }
}

impl std::str::FromStr for PaymentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "monthly" => Ok(Self::Monthly),
            "installments" => Ok(Self::Installments),
            _ => Err(format!("Unknown payment kind: {}", s)),
        }
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub kind: PaymentKind,
    // Both present iff kind == Installments; current_installment <= installments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_installment: Option<u32>,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub is_extra: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub is_subscribed: bool,
}

/// Snapshot of the current collections, rebuilt on demand and never persisted
/// as a unit. The monthly budget is carried for the advice payload but unused.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialData {
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub monthly_budget: Decimal,
}

impl FinancialData {
    pub fn snapshot(expenses: &[Expense], incomes: &[Income]) -> Self {
        Self {
            expenses: expenses.to_vec(),
            incomes: incomes.to_vec(),
            monthly_budget: Decimal::ZERO,
        }
    }
}

/// Structured reply from the budgeting assistant. Wire names are camelCase to
/// match the response schema sent with the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub health_summary: String,
    pub tips: Vec<String>,
    pub spending_alert: String,
}
