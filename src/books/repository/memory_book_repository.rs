use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, SearchField};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: vec![],
        }
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn == isbn)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        if self.exists(entity.isbn.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        self.books.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let ndx = self.position(entity.isbn.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", entity.isbn).as_str()))?;
        let mut updated = entity.clone();
        updated.version = self.books[ndx].version + 1;
        updated.updated_at = Utc::now().naive_utc();
        self.books[ndx] = updated;
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.iter()
            .find(|b| b.isbn == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book with isbn {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        let ndx = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", id).as_str()))?;
        self.books.remove(ndx);
        Ok(1)
    }

    fn exists(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn find_all(&self) -> Vec<BookEntity> {
        self.books.clone()
    }
}

impl BookRepository for MemoryBookRepository {
    fn search(&self, field: SearchField, term: &str) -> Vec<BookEntity> {
        let term = term.to_lowercase();
        self.books.iter()
            .filter(|b| {
                let value = match field {
                    SearchField::Title => b.title.as_str(),
                    SearchField::Author => b.author.as_str(),
                };
                value.to_lowercase().contains(term.as_str())
            })
            .cloned()
            .collect()
    }
}
