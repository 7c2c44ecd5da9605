use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_MAX_BORROWED_BOOKS: usize = 3;

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}


// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    #[serde(default = "default_max_borrowed_books")]
    pub max_borrowed_books: usize,
}

fn default_max_borrowed_books() -> usize {
    DEFAULT_MAX_BORROWED_BOOKS
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_borrowed_books: DEFAULT_MAX_BORROWED_BOOKS,
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        if config.max_borrowed_books == 0 {
            return Err(LibraryError::validation(
                "max_borrowed_books must be greater than 0", Some("invalid_config".to_string())));
        }
        Ok(config)
    }
}
