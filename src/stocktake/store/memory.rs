use super::DataStore;
use crate::error::{InventoryError, Result};
use crate::model::{NewProduct, Product};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, record: &NewProduct) -> Result<i64> {
        if self.products.values().any(|p| p.name == record.name) {
            return Err(InventoryError::DuplicateName(record.name.clone()));
        }
        self.next_id += 1;
        let id = self.next_id;
        self.products.insert(id, record.clone().into_product(id));
        Ok(id)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        Ok(self.products.values().find(|p| p.name == name).cloned())
    }

    fn overwrite(&mut self, id: i64, record: &NewProduct) -> Result<()> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(id))?;
        product.price = record.price;
        product.quantity = record.quantity;
        product.last_updated = record.last_updated;
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> Result<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }

    fn id_range(&self) -> Result<(i64, i64)> {
        let min = self.products.keys().next();
        let max = self.products.keys().next_back();
        match (min, max) {
            (Some(min), Some(max)) => Ok((*min, *max)),
            _ => Err(InventoryError::EmptyStore),
        }
    }

    fn all_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = NewProduct::new(
                    format!("Product {}", i + 1),
                    100 * (i as i64 + 1),
                    i as i64 + 1,
                    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                );
                self.store.insert(&record).unwrap();
            }
            self
        }

        pub fn with_product(mut self, name: &str, price: i64, quantity: i64, date: NaiveDate) -> Self {
            let record = NewProduct::new(name, price, quantity, date);
            self.store.insert(&record).unwrap();
            self
        }

        /// Pin the next assigned id, to build stores with gaps.
        pub fn skip_ids(mut self, count: i64) -> Self {
            self.store.next_id += count;
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn test_id_range_empty() {
        let store = InMemoryStore::new();
        assert!(matches!(store.id_range(), Err(InventoryError::EmptyStore)));
    }

    #[test]
    fn test_id_range_with_gaps() {
        let store = StoreFixture::new()
            .skip_ids(2)
            .with_products(1)
            .skip_ids(3)
            .with_product("B", 1, 1, chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .skip_ids(1)
            .with_product("C", 1, 1, chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .store;
        assert_eq!(store.id_range().unwrap(), (3, 9));
    }

    #[test]
    fn test_insert_rejects_duplicate_names() {
        let mut store = StoreFixture::new().with_products(1).store;
        let dup = store.get_by_id(1).unwrap();
        let err = store
            .insert(&NewProduct::new(dup.name, 1, 1, dup.last_updated))
            .unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateName(_)));
    }

    #[test]
    fn test_get_by_id_not_found() {
        let store = StoreFixture::new().with_products(2).store;
        assert!(matches!(store.get_by_id(5), Err(InventoryError::NotFound(5))));
    }
}
