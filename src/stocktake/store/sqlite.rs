use super::DataStore;
use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS product (
    product_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name     TEXT    NOT NULL UNIQUE,
    product_price    INTEGER NOT NULL DEFAULT 0,
    product_quantity INTEGER NOT NULL DEFAULT 0 CHECK (product_quantity >= 0),
    date_updated     TEXT    NOT NULL
);
";

const SELECT_COLUMNS: &str =
    "SELECT product_id, product_name, product_price, product_quantity, date_updated FROM product";

/// Product storage in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %path.display(), "opening database");
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            quantity: row.get(3)?,
            last_updated: row.get(4)?,
        })
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl DataStore for SqliteStore {
    fn insert(&mut self, record: &NewProduct) -> Result<i64> {
        let inserted = self.conn.execute(
            "INSERT INTO product (product_name, product_price, product_quantity, date_updated)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.name,
                record.price,
                record.quantity,
                record.last_updated
            ],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => {
                Err(InventoryError::DuplicateName(record.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let sql = format!("{} WHERE product_name = ?1", SELECT_COLUMNS);
        let product = self
            .conn
            .query_row(&sql, params![name], Self::row_to_product)
            .optional()?;
        Ok(product)
    }

    fn overwrite(&mut self, id: i64, record: &NewProduct) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE product
             SET product_price = ?1, product_quantity = ?2, date_updated = ?3
             WHERE product_id = ?4",
            params![record.price, record.quantity, record.last_updated, id],
        )?;
        if changed == 0 {
            return Err(InventoryError::NotFound(id));
        }
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> Result<Product> {
        let sql = format!("{} WHERE product_id = ?1", SELECT_COLUMNS);
        self.conn
            .query_row(&sql, params![id], Self::row_to_product)
            .optional()?
            .ok_or(InventoryError::NotFound(id))
    }

    fn id_range(&self) -> Result<(i64, i64)> {
        let (min, max): (Option<i64>, Option<i64>) = self.conn.query_row(
            "SELECT MIN(product_id), MAX(product_id) FROM product",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match (min, max) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => Err(InventoryError::EmptyStore),
        }
    }

    fn all_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(SELECT_COLUMNS)?;
        let products = stmt
            .query_map([], Self::row_to_product)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let record = NewProduct::new("Widget", 599, 10, ymd(2020, 1, 1));
        let id = store.insert(&record).unwrap();

        assert_eq!(store.get_by_id(id).unwrap(), record.into_product(id));
    }

    #[test]
    fn test_insert_duplicate_name() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let record = NewProduct::new("Widget", 599, 10, ymd(2020, 1, 1));
        store.insert(&record).unwrap();

        let err = store.insert(&record).unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateName(name) if name == "Widget"));
    }

    #[test]
    fn test_negative_quantity_violates_check() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let record = NewProduct::new("Widget", 599, -1, ymd(2020, 1, 1));
        assert!(matches!(
            store.insert(&record),
            Err(InventoryError::Database(_))
        ));
    }

    #[test]
    fn test_get_by_id_not_found() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(store.get_by_id(42), Err(InventoryError::NotFound(42))));
    }

    #[test]
    fn test_id_range() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(store.id_range(), Err(InventoryError::EmptyStore)));

        for name in ["a", "b", "c"] {
            store
                .insert(&NewProduct::new(name, 1, 1, ymd(2020, 1, 1)))
                .unwrap();
        }
        assert_eq!(store.id_range().unwrap(), (1, 3));
    }

    #[test]
    fn test_find_by_name() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .insert(&NewProduct::new("Widget", 1, 1, ymd(2020, 1, 1)))
            .unwrap();

        assert_eq!(store.find_by_name("Widget").unwrap().unwrap().id, 1);
        assert!(store.find_by_name("Gizmo").unwrap().is_none());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("inventory.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store
                .insert(&NewProduct::new("Widget", 599, 10, ymd(2020, 1, 1)))
                .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let all = store.all_products().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].last_updated, ymd(2020, 1, 1));
    }
}
