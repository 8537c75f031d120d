use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A product row as persisted. `price` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    pub last_updated: NaiveDate,
}

/// A normalized record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    pub last_updated: NaiveDate,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: i64, quantity: i64, last_updated: NaiveDate) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            last_updated,
        }
    }

    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            last_updated: self.last_updated,
        }
    }
}
