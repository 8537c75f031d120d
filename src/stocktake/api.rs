//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! inventory operations, whatever the front end.
//!
//! The API dispatches to the matching command and returns structured types. It
//! does no printing and holds no business logic.
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<SqliteStore>`
//! - Testing: `InventoryApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::Path;

/// Owns the store for the lifetime of the process.
pub struct InventoryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn seed(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store, path, today())
    }

    pub fn view_product(&self, id: i64) -> Result<commands::view::Lookup> {
        commands::view::run(&self.store, id)
    }

    /// Smallest and largest product id, for prompting.
    pub fn id_range(&self) -> Result<(i64, i64)> {
        self.store.id_range()
    }

    pub fn add_product(&mut self, request: &commands::add::AddRequest) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, request, today())
    }

    pub fn export(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use commands::add::{validate_name, AddRequest};
pub use commands::view::{Lookup, ViewInput};
pub use commands::{CmdMessage, CmdResult, MessageLevel, SeedReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_add_then_view() {
        let mut api = InventoryApi::new(InMemoryStore::new());
        let result = api
            .add_product(&AddRequest::new("Widget", "$5.99", "2"))
            .unwrap();
        let id = result.affected_products[0].id;

        match api.view_product(id).unwrap() {
            Lookup::Found(product) => {
                assert_eq!(product.name, "Widget");
                assert_eq!(product.last_updated, today());
            }
            other => panic!("unexpected lookup: {:?}", other),
        }
        assert_eq!(api.id_range().unwrap(), (id, id));
    }

    #[test]
    fn test_id_range_empty() {
        let api = InventoryApi::new(InMemoryStore::new());
        assert!(matches!(api.id_range(), Err(InventoryError::EmptyStore)));
    }
}
