use crate::error::{InventoryError, Result};
use crate::model::Product;
use crate::store::DataStore;

/// Token that leaves the view prompt.
pub const RETURN_TOKEN: &str = "r";

/// What the operator typed at the view prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewInput {
    Return,
    Id(i64),
    /// A whole number too large to be any assigned id.
    OutOfRange(String),
    Invalid(String),
}

impl ViewInput {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(RETURN_TOKEN) {
            return ViewInput::Return;
        }
        match trimmed.parse() {
            Ok(id) => ViewInput::Id(id),
            Err(_) if is_whole_number(trimmed) => ViewInput::OutOfRange(trimmed.to_string()),
            Err(_) => ViewInput::Invalid(trimmed.to_string()),
        }
    }
}

fn is_whole_number(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Result of looking up a product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Product),
    /// No row has that id; `min..=max` is what is assigned.
    Missing { id: i64, min: i64, max: i64 },
}

/// Look up one product. An empty inventory is reported as `EmptyStore`.
pub fn run<S: DataStore>(store: &S, id: i64) -> Result<Lookup> {
    match store.get_by_id(id) {
        Ok(product) => Ok(Lookup::Found(product)),
        Err(InventoryError::NotFound(id)) => {
            let (min, max) = store.id_range()?;
            Ok(Lookup::Missing { id, min, max })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_parse_input() {
        assert_eq!(ViewInput::parse("r"), ViewInput::Return);
        assert_eq!(ViewInput::parse(" R \n"), ViewInput::Return);
        assert_eq!(ViewInput::parse("12"), ViewInput::Id(12));
        assert_eq!(
            ViewInput::parse("twelve"),
            ViewInput::Invalid("twelve".to_string())
        );
        assert_eq!(ViewInput::parse(""), ViewInput::Invalid(String::new()));
        assert_eq!(ViewInput::parse("-"), ViewInput::Invalid("-".to_string()));
    }

    #[test]
    fn test_parse_oversized_id_is_out_of_range() {
        assert_eq!(
            ViewInput::parse("99999999999999999999"),
            ViewInput::OutOfRange("99999999999999999999".to_string())
        );
        assert_eq!(
            ViewInput::parse(" -99999999999999999999 "),
            ViewInput::OutOfRange("-99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_found() {
        let store = StoreFixture::new().with_products(3).store;
        match run(&store, 2).unwrap() {
            Lookup::Found(product) => assert_eq!(product.name, "Product 2"),
            other => panic!("unexpected lookup: {:?}", other),
        }
    }

    #[test]
    fn test_missing_reports_range() {
        let store = StoreFixture::new().skip_ids(2).with_products(3).store;
        assert_eq!(
            run(&store, 99).unwrap(),
            Lookup::Missing {
                id: 99,
                min: 3,
                max: 5
            }
        );
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store, 1), Err(InventoryError::EmptyStore)));
    }
}
