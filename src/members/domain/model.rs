use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::Member;
use crate::utils::date::serializer;

// MemberEntity abstracts a library member. borrowed_books holds the ISBNs currently on
// loan to the member, in borrow order and without duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: String,
    pub version: i64,
    pub name: String,
    pub email: String,
    pub borrowed_books: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl MemberEntity {
    pub fn new(member_id: &str, name: &str, email: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            version: 0,
            name: name.to_string(),
            email: email.to_string(),
            borrowed_books: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Member for MemberEntity {
    fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|b| b == isbn)
    }

    fn borrowed_count(&self) -> usize {
        self.borrowed_books.len()
    }
}

impl Display for MemberEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "ID: {}", self.member_id)?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Email: {}", self.email)?;
        writeln!(f, "  Borrowed Books: {}", self.borrowed_books.len())
    }
}
