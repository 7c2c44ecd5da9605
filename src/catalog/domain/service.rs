use std::cmp;
use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookUpdate;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{Genre, LibraryError, LibraryResult, SearchField};
use crate::gateway::events::EventPublisher;
use crate::members::domain::{is_valid_email, Member};
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberUpdate;
use crate::members::repository::MemberRepository;

pub struct CatalogStore {
    max_borrowed_books: usize,
    book_repository: Box<dyn BookRepository>,
    member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogStore {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               member_repository: Box<dyn MemberRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            max_borrowed_books: config.max_borrowed_books,
            book_repository,
            member_repository,
            events_publisher,
        }
    }

    fn insert_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, total_copies: i64) -> LibraryResult<BookEntity> {
        if self.book_repository.exists(isbn) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", isbn).as_str()));
        }
        let genre = genre.parse::<Genre>()?;
        validate_copies(total_copies)?;

        let book = BookEntity::new(isbn, title, author, genre, total_copies);
        self.book_repository.create(&book)?;
        info!(isbn, "book '{}' by {} added", title, author);
        self.emit(DomainEvent::added("books", "books", isbn, &HashMap::new(), &book));
        Ok(book)
    }

    fn insert_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<MemberEntity> {
        if self.member_repository.exists(member_id) {
            return Err(LibraryError::duplicate_key(
                format!("member with id {} already exists", member_id).as_str()));
        }
        validate_email(email)?;

        let member = MemberEntity::new(member_id, name, email);
        self.member_repository.create(&member)?;
        info!(member_id, "member '{}' added", name);
        self.emit(DomainEvent::added("members", "members", member_id, &HashMap::new(), &member));
        Ok(member)
    }

    fn apply_book_update(&mut self, isbn: &str, update: &BookUpdate) -> LibraryResult<BookEntity> {
        let mut book = self.book_repository.get(isbn)?;
        if update.is_empty() {
            return Ok(book);
        }
        let genre = update.genre.as_deref().map(str::parse::<Genre>).transpose()?;
        if let Some(total_copies) = update.total_copies {
            validate_copies(total_copies)?;
        }

        if let Some(title) = &update.title {
            book.title = title.to_string();
        }
        if let Some(author) = &update.author {
            book.author = author.to_string();
        }
        if let Some(genre) = genre {
            book.genre = genre;
        }
        if let Some(total_copies) = update.total_copies {
            // copies on loan keep their claim first; shrinking below that floors at zero
            // and is not reconciled against the borrowers.
            let loaned = book.loaned_copies();
            book.total_copies = total_copies;
            book.available_copies = cmp::max(0, total_copies.saturating_sub(loaned));
        }
        self.book_repository.update(&book)?;
        let updated = self.book_repository.get(isbn)?;
        info!(isbn, "book with isbn {} updated", isbn);
        self.emit(DomainEvent::updated("books", "books", isbn, &HashMap::new(), &updated));
        Ok(updated)
    }

    fn apply_member_update(&mut self, member_id: &str, update: &MemberUpdate) -> LibraryResult<MemberEntity> {
        let mut member = self.member_repository.get(member_id)?;
        if let Some(email) = &update.email {
            validate_email(email)?;
        }

        if let Some(name) = &update.name {
            member.name = name.to_string();
        }
        if let Some(email) = &update.email {
            member.email = email.to_string();
        }
        self.member_repository.update(&member)?;
        let updated = self.member_repository.get(member_id)?;
        info!(member_id, "member with id {} updated", member_id);
        self.emit(DomainEvent::updated("members", "members", member_id, &HashMap::new(), &updated));
        Ok(updated)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()> {
        let book = self.book_repository.get(isbn)?;
        if book.available_copies < book.total_copies {
            return Err(LibraryError::constraint_violation(
                format!("cannot delete book '{}', it has borrowed copies", book.title).as_str(),
                Some("outstanding_loans".to_string())));
        }
        self.book_repository.delete(isbn)?;
        info!(isbn, "book '{}' deleted", book.title);
        self.emit(DomainEvent::deleted("books", "books", isbn, &HashMap::new(), &book));
        Ok(())
    }

    fn remove_member(&mut self, member_id: &str) -> LibraryResult<()> {
        let member = self.member_repository.get(member_id)?;
        if member.borrowed_count() > 0 {
            return Err(LibraryError::constraint_violation(
                format!("cannot delete member '{}', they have borrowed books", member.name).as_str(),
                Some("borrowed_books".to_string())));
        }
        self.member_repository.delete(member_id)?;
        info!(member_id, "member '{}' deleted", member.name);
        self.emit(DomainEvent::deleted("members", "members", member_id, &HashMap::new(), &member));
        Ok(())
    }

    fn lend(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()> {
        let mut member = self.member_repository.get(member_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if member.borrowed_count() >= self.max_borrowed_books {
            return Err(LibraryError::constraint_violation(
                format!("member '{}' has already borrowed the maximum of {} books",
                        member.name, self.max_borrowed_books).as_str(),
                Some("borrow_limit".to_string())));
        }
        if !book.is_available() {
            return Err(LibraryError::constraint_violation(
                format!("no copies of '{}' are available", book.title).as_str(),
                Some("no_copies".to_string())));
        }
        if member.has_borrowed(isbn) {
            return Err(LibraryError::constraint_violation(
                format!("member '{}' has already borrowed '{}'", member.name, book.title).as_str(),
                Some("already_borrowed".to_string())));
        }

        member.borrowed_books.push(isbn.to_string());
        book.available_copies -= 1;
        self.book_repository.update(&book)?;
        self.member_repository.update(&member)?;
        info!(member_id, isbn, "member '{}' borrowed '{}'", member.name, book.title);
        self.emit(DomainEvent::borrowed("book_borrowed", "loans", isbn,
                                        &HashMap::from([("member_id".to_string(), member_id.to_string())]), &book));
        Ok(())
    }

    fn take_back(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()> {
        let mut member = self.member_repository.get(member_id)?;
        let mut book = self.book_repository.get(isbn)?;
        if !member.has_borrowed(isbn) {
            return Err(LibraryError::constraint_violation(
                format!("member '{}' has not borrowed '{}'", member.name, book.title).as_str(),
                Some("not_borrowed".to_string())));
        }

        member.borrowed_books.retain(|b| b != isbn);
        book.available_copies = book.available_copies.saturating_add(1);
        self.book_repository.update(&book)?;
        self.member_repository.update(&member)?;
        info!(member_id, isbn, "member '{}' returned '{}'", member.name, book.title);
        self.emit(DomainEvent::returned("book_returned", "loans", isbn,
                                        &HashMap::from([("member_id".to_string(), member_id.to_string())]), &book));
        Ok(())
    }

    // Publishing never undoes a mutation that already happened.
    fn emit(&mut self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!(error = %err, "failed to publish catalog event");
        }
    }
}

impl CatalogService for CatalogStore {
    fn add_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, total_copies: i64) -> LibraryResult<BookEntity> {
        self.insert_book(isbn, title, author, genre, total_copies).map_err(|err| rejected("add_book", err))
    }

    fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<MemberEntity> {
        self.insert_member(member_id, name, email).map_err(|err| rejected("add_member", err))
    }

    fn search_books(&self, term: &str, by: &str) -> LibraryResult<Vec<BookEntity>> {
        let field = by.parse::<SearchField>().map_err(|err| rejected("search_books", err))?;
        Ok(self.book_repository.search(field, term))
    }

    fn update_book(&mut self, isbn: &str, update: &BookUpdate) -> LibraryResult<BookEntity> {
        self.apply_book_update(isbn, update).map_err(|err| rejected("update_book", err))
    }

    fn update_member(&mut self, member_id: &str, update: &MemberUpdate) -> LibraryResult<MemberEntity> {
        self.apply_member_update(member_id, update).map_err(|err| rejected("update_member", err))
    }

    fn delete_book(&mut self, isbn: &str) -> LibraryResult<()> {
        self.remove_book(isbn).map_err(|err| rejected("delete_book", err))
    }

    fn delete_member(&mut self, member_id: &str) -> LibraryResult<()> {
        self.remove_member(member_id).map_err(|err| rejected("delete_member", err))
    }

    fn borrow_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()> {
        self.lend(member_id, isbn).map_err(|err| rejected("borrow_book", err))
    }

    fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<()> {
        self.take_back(member_id, isbn).map_err(|err| rejected("return_book", err))
    }

    fn find_book(&self, isbn: &str) -> LibraryResult<BookEntity> {
        self.book_repository.get(isbn)
    }

    fn find_member(&self, member_id: &str) -> LibraryResult<MemberEntity> {
        self.member_repository.get(member_id)
    }

    fn books(&self) -> Vec<BookEntity> {
        self.book_repository.find_all()
    }

    fn members(&self) -> Vec<MemberEntity> {
        self.member_repository.find_all()
    }

    fn borrowers_of(&self, isbn: &str) -> Vec<MemberEntity> {
        self.member_repository.find_by_borrowed(isbn)
    }

    fn display_books(&self) -> String {
        let books = self.book_repository.find_all();
        if books.is_empty() {
            return "No books in the system.\n".to_string();
        }
        let body: String = books.iter().map(|book| format!("{}\n", book)).collect();
        format!("=== ALL BOOKS ===\n{}", body)
    }

    fn display_members(&self) -> String {
        let members = self.member_repository.find_all();
        if members.is_empty() {
            return "No members in the system.\n".to_string();
        }
        let body: String = members.iter().map(|member| {
            // isbns that no longer resolve are skipped
            let titles: String = member.borrowed_books.iter()
                .filter_map(|isbn| self.book_repository.get(isbn).ok())
                .map(|book| format!("      - {} (ISBN: {})\n", book.title, book.isbn))
                .collect();
            if member.borrowed_books.is_empty() {
                format!("{}\n", member)
            } else {
                format!("{}    Books:\n{}\n", member, titles)
            }
        }).collect();
        format!("=== ALL MEMBERS ===\n{}", body)
    }

    fn genres(&self) -> &'static [Genre] {
        Genre::all()
    }
}

fn validate_copies(total_copies: i64) -> LibraryResult<()> {
    if total_copies <= 0 {
        return Err(LibraryError::validation(
            "total copies must be greater than 0", Some("invalid_copies".to_string())));
    }
    Ok(())
}

fn validate_email(email: &str) -> LibraryResult<()> {
    if !is_valid_email(email) {
        return Err(LibraryError::validation(
            format!("invalid email format '{}'", email).as_str(), Some("invalid_email".to_string())));
    }
    Ok(())
}

fn rejected(operation: &str, err: LibraryError) -> LibraryError {
    warn!(operation, kind = err.kind(), reason_code = err.reason_code().unwrap_or_default(), "{}", err);
    err
}
