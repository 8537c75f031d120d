use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::NewProduct;
use crate::normalize::{format_price, parse_name, parse_price, parse_quantity};
use crate::store::{DataStore, UpsertOutcome};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Raw operator input for a new product.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl AddRequest {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

pub fn validate_name(raw: &str) -> Result<String> {
    let name = parse_name(raw);
    if name.is_empty() {
        return Err(InventoryError::InvalidName("must not be empty"));
    }
    Ok(name)
}

/// Added stock must be strictly positive.
pub fn validate_quantity(raw: &str) -> Result<i64> {
    let quantity = parse_quantity(raw)?;
    if quantity == 0 {
        return Err(InventoryError::InvalidQuantity(
            raw.to_string(),
            "must be greater than zero",
        ));
    }
    Ok(quantity)
}

/// Validate the request, stamp it with `today` and upsert it.
///
/// Nothing is written unless every field is valid.
pub fn run<S: DataStore>(store: &mut S, request: &AddRequest, today: NaiveDate) -> Result<CmdResult> {
    let record = NewProduct {
        name: validate_name(&request.name)?,
        price: parse_price(&request.price)?,
        quantity: validate_quantity(&request.quantity)?,
        last_updated: today,
    };

    let outcome = store.upsert(&record)?;
    let product = store.get_by_id(outcome.id())?;

    let mut result = CmdResult::default();
    match outcome {
        UpsertOutcome::Inserted(id) => {
            info!(id, name = %product.name, "product added");
            result.add_message(CmdMessage::success(format!(
                "Product added: {} ({} x {})",
                product.name,
                product.quantity,
                format_price(product.price)
            )));
        }
        UpsertOutcome::Updated(id) => {
            info!(id, name = %product.name, "product updated");
            result.add_message(CmdMessage::success(format!(
                "Product updated: {} ({} x {})",
                product.name,
                product.quantity,
                format_price(product.price)
            )));
        }
        UpsertOutcome::Kept(id) => {
            warn!(id, name = %product.name, stored = %product.last_updated, "newer record kept");
            result.add_message(CmdMessage::warning(format!(
                "{} was not changed: the stored record is dated {}",
                product.name, product.last_updated
            )));
        }
    }

    Ok(result.with_affected_products(vec![product]))
}
