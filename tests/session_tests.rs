// Copyright (c) Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use uuid::Uuid;

use finanza::models::{Expense, Category, PaymentKind};
use finanza::session::{
    login, logout, require_active, screen_for, subscribe, Credentials, MockAuthenticator,
    MockCheckout, PaymentMethod, Screen,
};
use finanza::store::Store;

fn creds(email: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: "hunter2".to_string(),
        name: Some("Maria".to_string()),
    }
}

#[test]
fn fresh_store_shows_auth_screen() {
    let store = Store::in_memory().unwrap();
    assert_eq!(store.load_user().unwrap(), None);
    assert_eq!(screen_for(None), Screen::Auth);
    assert!(require_active(&store).is_err());
}

#[test]
fn login_moves_to_subscription_screen() {
    let store = Store::in_memory().unwrap();
    let user = login(&store, &MockAuthenticator, &creds("maria@example.com")).unwrap();
    assert_eq!(user.email, "maria@example.com");
    assert_eq!(user.name, "Maria");
    assert!(!user.is_subscribed);

    let stored = store.load_user().unwrap();
    assert_eq!(stored.as_ref(), Some(&user));
    assert_eq!(screen_for(stored.as_ref()), Screen::Subscription);
    assert!(require_active(&store).is_err());
}

#[test]
fn login_defaults_display_name() {
    let store = Store::in_memory().unwrap();
    let user = login(
        &store,
        &MockAuthenticator,
        &Credentials {
            email: "jo@example.com".to_string(),
            password: "pw".to_string(),
            name: None,
        },
    )
    .unwrap();
    assert_eq!(user.name, "User");
}

#[test]
fn invalid_credentials_do_not_create_a_user() {
    let store = Store::in_memory().unwrap();

    assert!(login(&store, &MockAuthenticator, &creds("not-an-email")).is_err());
    assert!(login(&store, &MockAuthenticator, &creds("@nodomain")).is_err());
    assert!(login(&store, &MockAuthenticator, &creds("no local@")).is_err());

    let mut empty_password = creds("maria@example.com");
    empty_password.password = "".to_string();
    assert!(login(&store, &MockAuthenticator, &empty_password).is_err());

    assert_eq!(store.load_user().unwrap(), None);
}

#[test]
fn subscribe_requires_a_signed_in_user() {
    let store = Store::in_memory().unwrap();
    let checkout = MockCheckout {
        method: PaymentMethod::Pix,
    };
    assert!(subscribe(&store, &checkout).is_err());
    assert_eq!(store.load_user().unwrap(), None);
}

#[test]
fn payment_completion_unlocks_the_main_screen() {
    let store = Store::in_memory().unwrap();
    let before = login(&store, &MockAuthenticator, &creds("maria@example.com")).unwrap();

    let checkout = MockCheckout {
        method: PaymentMethod::Card,
    };
    let after = subscribe(&store, &checkout).unwrap();
    assert!(after.is_subscribed);
    // Same identity, only the flag flips.
    assert_eq!(after.id, before.id);

    let stored = store.load_user().unwrap();
    assert_eq!(screen_for(stored.as_ref()), Screen::Main);
    assert_eq!(require_active(&store).unwrap().id, before.id);
}

#[test]
fn subscribe_is_idempotent_once_active() {
    let store = Store::in_memory().unwrap();
    login(&store, &MockAuthenticator, &creds("maria@example.com")).unwrap();
    let checkout = MockCheckout {
        method: PaymentMethod::Boleto,
    };
    let first = subscribe(&store, &checkout).unwrap();
    let second = subscribe(&store, &checkout).unwrap();
    assert_eq!(first, second);
}

#[test]
fn logout_clears_the_stored_user_but_not_the_collections() {
    let store = Store::in_memory().unwrap();
    login(&store, &MockAuthenticator, &creds("maria@example.com")).unwrap();
    subscribe(
        &store,
        &MockCheckout {
            method: PaymentMethod::Pix,
        },
    )
    .unwrap();

    let expenses = vec![Expense {
        id: Uuid::new_v4(),
        description: "Market".to_string(),
        amount: "42.00".parse().unwrap(),
        category: Category::Food,
        kind: PaymentKind::Single,
        installments: None,
        current_installment: None,
        date: Utc::now(),
    }];
    store.save_expenses(&expenses).unwrap();

    logout(&store).unwrap();
    assert_eq!(store.load_user().unwrap(), None);
    assert_eq!(screen_for(None), Screen::Auth);
    assert_eq!(store.load_expenses().unwrap(), expenses);
}

#[test]
fn logout_from_any_state_is_safe() {
    let store = Store::in_memory().unwrap();
    // Nothing stored yet.
    logout(&store).unwrap();

    login(&store, &MockAuthenticator, &creds("maria@example.com")).unwrap();
    // Unsubscribed.
    logout(&store).unwrap();
    assert_eq!(store.load_user().unwrap(), None);
}
