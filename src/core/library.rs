use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // The request is well-formed but the current state of books or members forbids it,
    // e.g. borrow limit reached, no copies left or copies still on loan.
    ConstraintViolation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn constraint_violation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::ConstraintViolation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LibraryError::DuplicateKey { .. } => { "DuplicateKey" }
            LibraryError::NotFound { .. } => { "NotFound" }
            LibraryError::Validation { .. } => { "Validation" }
            LibraryError::ConstraintViolation { .. } => { "ConstraintViolation" }
            LibraryError::Serialization { .. } => { "Serialization" }
        }
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LibraryError::Validation { reason_code, .. } => { reason_code.as_deref() }
            LibraryError::ConstraintViolation { reason_code, .. } => { reason_code.as_deref() }
            _ => { None }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::ConstraintViolation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Mystery,
    Romance,
    Biography,
    History,
    Science,
}

/// Valid genres in the order they are listed to users.
pub const GENRES: [Genre; 8] = [
    Genre::Fiction,
    Genre::NonFiction,
    Genre::SciFi,
    Genre::Mystery,
    Genre::Romance,
    Genre::Biography,
    Genre::History,
    Genre::Science,
];

impl Genre {
    pub fn all() -> &'static [Genre] {
        &GENRES
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::SciFi => "Sci-Fi",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Science => "Science",
        }
    }
}

impl FromStr for Genre {
    type Err = LibraryError;

    // Names must match exactly, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GENRES.iter()
            .find(|genre| genre.as_str() == s)
            .copied()
            .ok_or_else(|| {
                let valid: Vec<&str> = GENRES.iter().map(Genre::as_str).collect();
                LibraryError::validation(
                    format!("invalid genre '{}', valid genres are: {}", s, valid.join(", ")).as_str(),
                    Some("invalid_genre".to_string()))
            })
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl FromStr for SearchField {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            _ => Err(LibraryError::validation(
                format!("search field must be 'title' or 'author', got '{}'", s).as_str(),
                Some("invalid_search_field".to_string()))),
        }
    }
}

impl Display for SearchField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchField::Title => write!(f, "title"),
            SearchField::Author => write!(f, "author"),
        }
    }
}
