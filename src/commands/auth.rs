// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::session::{self, Credentials, MockAuthenticator, MockCheckout, PaymentMethod, Screen};
use crate::store::Store;

pub fn login(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let creds = Credentials {
        email: sub.get_one::<String>("email").unwrap().clone(),
        password: sub.get_one::<String>("password").unwrap().clone(),
        name: sub.get_one::<String>("name").cloned(),
    };
    let user = session::login(store, &MockAuthenticator, &creds)?;
    println!("Signed in as {} <{}>", user.name, user.email);
    println!("Subscription pending; run `finanza subscribe` to unlock the app.");
    Ok(())
}

pub fn subscribe(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let method: PaymentMethod = sub.get_one::<String>("method").unwrap().parse()?;
    let user = session::subscribe(store, &MockCheckout { method })?;
    println!(
        "Payment confirmed via {}. Welcome to Finanza Premium, {}!",
        method, user.name
    );
    Ok(())
}

pub fn logout(store: &Store) -> Result<()> {
    session::logout(store)?;
    println!("Signed out; the stored profile was removed.");
    Ok(())
}

pub fn status(store: &Store) -> Result<()> {
    let user = store.load_user()?;
    let screen = session::screen_for(user.as_ref());
    println!("Screen: {}", screen);
    if let Some(u) = &user {
        println!(
            "User: {} <{}>{}",
            u.name,
            u.email,
            if u.is_subscribed { " [premium]" } else { "" }
        );
    }
    match screen {
        Screen::Auth => {
            println!("Not signed in. Run `finanza login --email you@example.com --password ...`.")
        }
        Screen::Subscription => println!("Subscription pending. Run `finanza subscribe`."),
        Screen::Main => println!("All commands available."),
    }
    Ok(())
}
