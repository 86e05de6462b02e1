// Copyright (c) 2025 Finanza.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::{Expense, Income, User};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("app.finanza", "Finanza", "finanza"));

const KEY_USER: &str = "user";
const KEY_EXPENSES: &str = "expenses";
const KEY_INCOMES: &str = "incomes";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("finanza.sqlite"))
}

/// Persistent key/value surface backing the whole app. Each collection is
/// written in full under a fixed key whenever it changes; there are no
/// incremental writes.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open_or_init() -> Result<Store> {
        Self::open_at(&db_path()?)
    }

    pub fn open_at(path: &Path) -> Result<Store> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open store at {}", path.display()))?;
        let store = Store { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Store> {
        let store = Store {
            conn: Connection::open_in_memory()?,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
        CREATE TABLE IF NOT EXISTS kv(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
        )?;
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key=?1", params![key])?;
        Ok(())
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => {
                let v = serde_json::from_str(&raw)
                    .with_context(|| format!("Stored record '{}' is corrupt", key))?;
                Ok(Some(v))
            }
            None => Ok(None),
        }
    }

    fn save_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)?;
        debug!(key, bytes = raw.len(), "store write");
        Ok(())
    }

    pub fn load_user(&self) -> Result<Option<User>> {
        self.load_json(KEY_USER)
    }

    pub fn save_user(&self, user: &User) -> Result<()> {
        self.save_json(KEY_USER, user)
    }

    pub fn clear_user(&self) -> Result<()> {
        self.delete_raw(KEY_USER)
    }

    pub fn load_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.load_json(KEY_EXPENSES)?.unwrap_or_default())
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        self.save_json(KEY_EXPENSES, &expenses)
    }

    pub fn load_incomes(&self) -> Result<Vec<Income>> {
        Ok(self.load_json(KEY_INCOMES)?.unwrap_or_default())
    }

    pub fn save_incomes(&self, incomes: &[Income]) -> Result<()> {
        self.save_json(KEY_INCOMES, &incomes)
    }

    // Plain-string settings live in the same table, e.g. the advisor model.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.get_raw(key)
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.put_raw(key, value)
    }
}
