// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::User;
use crate::store::Store;

/// Top-level screen the app presents. Exactly one is active at a time and it
/// is derived from the stored user alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Subscription,
    Main,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Auth => "auth",
            Self::Subscription => "subscription",
            Self::Main => "main",
        };
        write!(f, "{}", s)
    }
}

/// The gate guard: absent user -> auth, unsubscribed -> subscription,
/// subscribed -> main app.
pub fn screen_for(user: Option<&User>) -> Screen {
    match user {
        None => Screen::Auth,
        Some(u) if !u.is_subscribed => Screen::Subscription,
        Some(_) => Screen::Main,
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("not signed in; run `finanza login` first")]
    NotAuthenticated,

    #[error("subscription required; run `finanza subscribe` first")]
    NotSubscribed,

    #[error("unknown payment method '{0}'")]
    UnknownPaymentMethod(String),

    #[error("payment was declined")]
    PaymentDeclined,
}

/// Identity provider seam. The bundled implementation is a mock; a real
/// backend can be substituted without touching the gate transitions.
pub trait Authenticator {
    fn authenticate(&self, creds: &Credentials) -> Result<User, SessionError>;
}

/// Payment provider seam, same substitution story as [`Authenticator`].
pub trait PaymentGateway {
    fn complete_payment(&self) -> Result<(), SessionError>;
}

/// Accepts any syntactically valid email and non-empty password; no backend
/// is involved and no credential check happens.
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, creds: &Credentials) -> Result<User, SessionError> {
        if !is_valid_email(&creds.email) {
            return Err(SessionError::InvalidEmail(creds.email.clone()));
        }
        if creds.password.is_empty() {
            return Err(SessionError::EmptyPassword);
        }
        Ok(User {
            id: Uuid::new_v4(),
            email: creds.email.clone(),
            name: creds
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "User".to_string()),
            is_subscribed: false,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Pix,
    Card,
    Boleto,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "pix",
            Self::Card => "card",
            Self::Boleto => "boleto",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = SessionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pix" => Ok(Self::Pix),
            "card" => Ok(Self::Card),
            "boleto" => Ok(Self::Boleto),
            _ => Err(SessionError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Simulated checkout: every supported method settles immediately, no
/// verification of any kind.
pub struct MockCheckout {
    pub method: PaymentMethod,
}

impl PaymentGateway for MockCheckout {
    fn complete_payment(&self) -> Result<(), SessionError> {
        debug!(method = self.method.as_str(), "simulated payment settled");
        Ok(())
    }
}

/// Auth -> Subscription: authenticate and persist the fresh (unsubscribed)
/// user record.
pub fn login(store: &Store, auth: &dyn Authenticator, creds: &Credentials) -> Result<User> {
    let user = auth.authenticate(creds)?;
    store.save_user(&user)?;
    Ok(user)
}

/// Subscription -> Main: run the checkout and flip the subscription flag on
/// the stored user. Requires a signed-in user; already-subscribed users pass
/// through unchanged.
pub fn subscribe(store: &Store, gateway: &dyn PaymentGateway) -> Result<User> {
    let mut user = store.load_user()?.ok_or(SessionError::NotAuthenticated)?;
    if user.is_subscribed {
        return Ok(user);
    }
    gateway.complete_payment()?;
    user.is_subscribed = true;
    store.save_user(&user)?;
    Ok(user)
}

/// Any state -> Auth: the stored user record is deleted, not just the
/// session. Expense and income collections survive.
pub fn logout(store: &Store) -> Result<()> {
    store.clear_user()?;
    Ok(())
}

/// Gate check for commands that live behind the main screen.
pub fn require_active(store: &Store) -> Result<User> {
    match store.load_user()? {
        None => Err(SessionError::NotAuthenticated.into()),
        Some(u) if !u.is_subscribed => Err(SessionError::NotSubscribed.into()),
        Some(u) => Ok(u),
    }
}

fn is_valid_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !s.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    }
}
