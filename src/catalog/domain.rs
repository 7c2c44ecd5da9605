pub mod service;

use crate::books::domain::model::BookEntity;
use crate::books::dto::BookUpdate;
use crate::core::library::{Genre, LibraryResult};
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberUpdate;

// CatalogService is the single entry point to books, members and their loans.
// Every mutation validates first and only then writes, so a rejected call leaves no trace.
pub trait CatalogService {
    fn add_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, total_copies: i64) -> LibraryResult<BookEntity>;
    fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<MemberEntity>;
    fn search_books(&self, term: &str, by: &str) -> LibraryResult<Vec<BookEntity>>;
    fn update_book(&mut self, isbn: &str, update: &BookUpdate) -> LibraryResult<BookEntity>;
    fn update_member(&mut self, member_id: &str, update: &MemberUpdate) -> LibraryResult<MemberEntity>;
    fn delete_book(&mut self, isbn: &str) -> LibraryResult<()>;
    fn delete_member(&mut self, member_id: &str) -> LibraryResult<()>;
    fn borrow_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()>;
    fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()>;
    fn find_book(&self, isbn: &str) -> LibraryResult<BookEntity>;
    fn find_member(&self, member_id: &str) -> LibraryResult<MemberEntity>;
    fn books(&self) -> Vec<BookEntity>;
    fn members(&self) -> Vec<MemberEntity>;
    fn borrowers_of(&self, isbn: &str) -> Vec<MemberEntity>;
    fn display_books(&self) -> String;
    fn display_members(&self) -> String;
    fn genres(&self) -> &'static [Genre];
}
