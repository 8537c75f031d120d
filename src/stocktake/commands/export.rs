use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::Product;
use crate::normalize::{format_date, format_price, RawRecord};
use crate::store::DataStore;
use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run<S: DataStore>(store: &S, path: &Path) -> Result<CmdResult> {
    let mut products = store.all_products()?;
    products.sort_by_key(|p| p.id);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(InventoryError::Io)?;
        }
    }
    let file = fs::File::create(path).map_err(InventoryError::Io)?;
    write_backup(file, &products)?;

    info!(path = %path.display(), rows = products.len(), "backup written");

    let mut result = CmdResult::default();
    if products.is_empty() {
        result.add_message(CmdMessage::info(
            "The inventory is empty; the backup has a header row only.",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Backup complete: {} products written to {}",
        products.len(),
        path.display()
    )));
    Ok(result)
}

/// Write products in the seed file format, so a backup can be loaded as a seed.
fn write_backup<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    // Serializing a struct only emits the header once there is a row, so write it by hand.
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record([
        "product_name",
        "product_price",
        "product_quantity",
        "date_updated",
    ])?;

    for product in products {
        wtr.serialize(RawRecord {
            product_name: product.name.clone(),
            product_price: format_price(product.price),
            product_quantity: product.quantity.to_string(),
            date_updated: Some(format_date(product.last_updated)),
        })?;
    }

    wtr.flush().map_err(InventoryError::Io)?;
    Ok(())
}
