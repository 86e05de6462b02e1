// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::models::{Advice, Category, FinancialData, PaymentKind};
use crate::utils::http_client;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("assistant request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("assistant returned no content")]
    EmptyResponse,

    #[error("assistant returned malformed advice: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One-shot client for the hosted model. No retries; each call is
/// fire-and-forget and the newest result wins.
pub struct AdviceClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl AdviceClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, AdviceError> {
        Ok(Self {
            http: http_client()?,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Reads the key from the environment; `model` falls back to the default
    /// when no override is stored.
    pub fn from_env(model: Option<String>) -> Result<Self, AdviceError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| AdviceError::MissingApiKey)?;
        Self::new(api_key, model.unwrap_or_else(|| DEFAULT_MODEL.to_string()))
    }

    pub fn request_advice(&self, data: &FinancialData) -> Result<Advice, AdviceError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(data),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };
        let url = format!("{}/{}:generateContent?key={}", API_BASE, self.model, self.api_key);
        debug!(model = %self.model, "requesting budgeting advice");
        let resp = self.http.post(url).json(&body).send()?.error_for_status()?;
        let reply: GenerateResponse = resp.json()?;
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(AdviceError::EmptyResponse)?;
        parse_advice(&text)
    }
}

/// Parses the model's JSON payload into the three-field advice shape.
pub fn parse_advice(text: &str) -> Result<Advice, AdviceError> {
    Ok(serde_json::from_str(text)?)
}

#[derive(Serialize)]
struct IncomeLine<'a> {
    desc: &'a str,
    amount: Decimal,
    extra: bool,
}

#[derive(Serialize)]
struct ExpenseLine<'a> {
    desc: &'a str,
    amount: Decimal,
    cat: Category,
    kind: PaymentKind,
}

/// Natural-language prompt embedding JSON projections of both collections.
pub fn build_prompt(data: &FinancialData) -> String {
    let incomes: Vec<IncomeLine> = data
        .incomes
        .iter()
        .map(|i| IncomeLine {
            desc: &i.description,
            amount: i.amount,
            extra: i.is_extra,
        })
        .collect();
    let expenses: Vec<ExpenseLine> = data
        .expenses
        .iter()
        .map(|e| ExpenseLine {
            desc: &e.description,
            amount: e.amount,
            cat: e.category,
            kind: e.kind,
        })
        .collect();

    format!(
        "Analyze the following finances and provide 3 practical saving tips and a summary of \
         overall financial health. Reply in a friendly, professional tone.\n\n\
         Incomes: {}\n\
         Expenses: {}\n",
        serde_json::to_string(&incomes).unwrap_or_else(|_| "[]".to_string()),
        serde_json::to_string(&expenses).unwrap_or_else(|_| "[]".to_string()),
    )
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "healthSummary": {
                "type": "STRING",
                "description": "Overall summary of the user's financial health."
            },
            "tips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Exactly 3 personalized saving tips."
            },
            "spendingAlert": {
                "type": "STRING",
                "description": "A warning when any category shows excessive spending."
            }
        },
        "required": ["healthSummary", "tips", "spendingAlert"]
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
