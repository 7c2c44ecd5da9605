use crate::core::domain::Identifiable;

pub mod model;

pub trait Member: Identifiable {
    fn has_borrowed(&self, isbn: &str) -> bool;
    fn borrowed_count(&self) -> usize;
}

// Requires an '@' and a '.' in the segment right after the first '@'.
pub fn is_valid_email(email: &str) -> bool {
    email.split('@').nth(1).map_or(false, |domain| domain.contains('.'))
}
