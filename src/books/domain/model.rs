use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Genre;
use crate::utils::date::serializer;

// BookEntity abstracts a catalog title keyed by ISBN. Copies are fungible and only
// counted, so a loan is a decrement of available_copies rather than a record of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub total_copies: i64,
    pub available_copies: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, genre: Genre, total_copies: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre,
            total_copies,
            available_copies: total_copies,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    fn loaned_copies(&self) -> i64 {
        self.total_copies - self.available_copies
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "ISBN: {}", self.isbn)?;
        writeln!(f, "  Title: {}", self.title)?;
        writeln!(f, "  Author: {}", self.author)?;
        writeln!(f, "  Genre: {}", self.genre)?;
        writeln!(f, "  Available: {}/{}", self.available_copies, self.total_copies)
    }
}
