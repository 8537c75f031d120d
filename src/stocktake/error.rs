use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Malformed price '{0}': expected a value like $5.99")]
    MalformedPrice(String),

    #[error("Malformed date '{0}': expected M/D/YYYY")]
    MalformedDate(String),

    #[error("Invalid quantity '{0}': {1}")]
    InvalidQuantity(String, &'static str),

    #[error("Invalid product name: {0}")]
    InvalidName(&'static str),

    #[error("A product named '{0}' already exists")]
    DuplicateName(String),

    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("The inventory is empty")]
    EmptyStore,

    #[error("Seed file line {line}: {source}")]
    Seed {
        line: u64,
        #[source]
        source: Box<InventoryError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
