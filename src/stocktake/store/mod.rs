//! # Storage Layer
//!
//! This module defines the storage abstraction for the inventory. The [`DataStore`]
//! trait lets commands run against different backends.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite table
//!   - One `product` table, `product_name` is `UNIQUE`
//!   - Opened once at startup, closed on drop
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same uniqueness and id assignment rules as the SQLite table
//!
//! ## Merge Policy
//!
//! Products are keyed by name. [`DataStore::upsert`] first tries a plain
//! [`DataStore::insert`]; when that fails with `DuplicateName` the incoming record
//! overwrites price, quantity and date only if its date is equal to or newer
//! than the stored one. Otherwise the stored row is kept untouched.
//!
//! Equal dates overwrite, so loading the same seed file twice is idempotent.

use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product};
use tracing::debug;

pub mod memory;
pub mod sqlite;

/// What [`DataStore::upsert`] did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(i64),
    Updated(i64),
    /// The stored row is newer than the incoming record.
    Kept(i64),
}

impl UpsertOutcome {
    pub fn id(&self) -> i64 {
        match self {
            UpsertOutcome::Inserted(id) | UpsertOutcome::Updated(id) | UpsertOutcome::Kept(id) => {
                *id
            }
        }
    }
}

/// Abstract interface for product storage.
pub trait DataStore {
    /// Create a new row and return its id. Fails with `DuplicateName` if the
    /// name is taken.
    fn insert(&mut self, record: &NewProduct) -> Result<i64>;

    /// Look up a product by its unique name.
    fn find_by_name(&self, name: &str) -> Result<Option<Product>>;

    /// Replace price, quantity and date of an existing row.
    fn overwrite(&mut self, id: i64, record: &NewProduct) -> Result<()>;

    /// Get a product by id, or `NotFound`.
    fn get_by_id(&self, id: i64) -> Result<Product>;

    /// Smallest and largest assigned id, or `EmptyStore`.
    fn id_range(&self) -> Result<(i64, i64)>;

    /// Every product, in no particular order.
    fn all_products(&self) -> Result<Vec<Product>>;

    /// Insert, or merge into the existing row under the equal-or-newer-wins rule.
    fn upsert(&mut self, record: &NewProduct) -> Result<UpsertOutcome> {
        match self.insert(record) {
            Ok(id) => {
                debug!(id, name = %record.name, "inserted product");
                Ok(UpsertOutcome::Inserted(id))
            }
            Err(InventoryError::DuplicateName(name)) => {
                let existing = self.find_by_name(&name)?.ok_or_else(|| {
                    InventoryError::Store(format!("'{}' vanished after a duplicate insert", name))
                })?;

                if existing.last_updated <= record.last_updated {
                    self.overwrite(existing.id, record)?;
                    debug!(id = existing.id, %name, "updated product");
                    Ok(UpsertOutcome::Updated(existing.id))
                } else {
                    debug!(
                        id = existing.id,
                        %name,
                        stored = %existing.last_updated,
                        incoming = %record.last_updated,
                        "kept newer stored product"
                    );
                    Ok(UpsertOutcome::Kept(existing.id))
                }
            }
            Err(e) => Err(e),
        }
    }
}
