pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::SearchField;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // case-insensitive substring match on the given field, in insertion order
    fn search(&self, field: SearchField, term: &str) -> Vec<BookEntity>;
}
