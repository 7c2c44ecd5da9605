use std::error::Error;
use std::fmt::Debug;
use mini_lms::books::dto::BookUpdate;
use mini_lms::catalog::domain::CatalogService;
use mini_lms::catalog::factory::create_catalog_service;
use mini_lms::core::domain::Configuration;
use mini_lms::core::library::LibraryResult;
use mini_lms::gateway::GatewayPublisherVia;
use mini_lms::members::dto::MemberUpdate;
use mini_lms::utils::logs::setup_tracing;

// Replays a scripted session against a fresh catalog. Set LMS_CONFIG to a JSON
// configuration file to override the defaults.

fn load_config() -> Result<Configuration, Box<dyn Error>> {
    match std::env::var("LMS_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(Configuration::from_json(json.as_str())?)
        }
        Err(_) => Ok(Configuration::new("demo")),
    }
}

fn report<T: Debug>(label: &str, res: LibraryResult<T>) {
    match res {
        Ok(_) => println!("  {} -> ok", label),
        Err(err) => println!("  {} -> failed ({}): {}", label, err.kind(), err),
    }
}

fn section(title: &str) {
    println!("\n{}\n{}", title, "-".repeat(20));
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = load_config()?;
    let mut catalog = create_catalog_service(&config, GatewayPublisherVia::Logs);

    println!("{}", "=".repeat(60));
    println!("MINI LIBRARY MANAGEMENT SYSTEM - DEMO (branch {})", config.branch_id);
    println!("{}", "=".repeat(60));

    section("1. ADDING BOOKS");
    report("add 0001", catalog.add_book("0001", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 3));
    report("add 0002", catalog.add_book("0002", "1984", "George Orwell", "Sci-Fi", 2));
    report("add 0003", catalog.add_book("0003", "To Kill a Mockingbird", "Harper Lee", "Fiction", 4));
    report("add 0004", catalog.add_book("0004", "The Catcher in the Rye", "J.D. Salinger", "Fiction", 1));

    section("2. ADDING MEMBERS");
    report("add M001", catalog.add_member("M001", "Alice Johnson", "alice.johnson@email.com"));
    report("add M002", catalog.add_member("M002", "Bob Smith", "bob.smith@email.com"));
    report("add M003", catalog.add_member("M003", "Carol Davis", "carol.davis@email.com"));

    section("3. CATALOG");
    print!("{}", catalog.display_books());
    print!("{}", catalog.display_members());
    let genres: Vec<&str> = catalog.genres().iter().map(|g| g.as_str()).collect();
    println!("Genres: {}", genres.join(", "));

    section("4. SEARCHING BOOKS");
    for (term, by) in [("Gatsby", "title"), ("Orwell", "author"), ("Orwell", "publisher")] {
        println!("Searching for '{}' by {}:", term, by);
        for book in catalog.search_books(term, by).unwrap_or_default() {
            println!("  Found: {} by {} (ISBN: {})", book.title, book.author, book.isbn);
        }
    }

    section("5. BORROWING BOOKS");
    report("M001 borrows 0001", catalog.borrow_book("M001", "0001"));
    report("M002 borrows 0002", catalog.borrow_book("M002", "0002"));
    report("M001 borrows 0003", catalog.borrow_book("M001", "0003"));
    report("M003 borrows 0004", catalog.borrow_book("M003", "0004"));
    print!("{}", catalog.display_books());
    print!("{}", catalog.display_members());

    section("6. BORROW LIMITS AND AVAILABILITY");
    report("add 0005", catalog.add_book("0005", "Test Book 1", "Test Author 1", "Mystery", 1));
    report("M001 borrows 0005", catalog.borrow_book("M001", "0005"));
    report("add 0006", catalog.add_book("0006", "Test Book 2", "Test Author 2", "Mystery", 1));
    report("M001 borrows 0006 (limit)", catalog.borrow_book("M001", "0006"));
    report("M002 borrows 0004 (no copies)", catalog.borrow_book("M002", "0004"));

    section("7. RETURNING BOOKS");
    report("M001 returns 0001", catalog.return_book("M001", "0001"));
    report("M002 returns 0002", catalog.return_book("M002", "0002"));
    print!("{}", catalog.display_books());
    print!("{}", catalog.display_members());

    section("8. UPDATING BOOKS AND MEMBERS");
    report("update 0001", catalog.update_book("0001", &BookUpdate::new()
        .title("The Great Gatsby (Updated Edition)").total_copies(5)));
    report("update M001", catalog.update_member("M001", &MemberUpdate::new()
        .name("Alice Johnson-Smith").email("alice.smith@email.com")));

    section("9. DELETING");
    report("delete 0003 (on loan)", catalog.delete_book("0003"));
    report("delete M001 (has books)", catalog.delete_member("M001"));
    report("M001 returns 0003", catalog.return_book("M001", "0003"));
    report("M001 returns 0005", catalog.return_book("M001", "0005"));
    report("delete M001", catalog.delete_member("M001"));
    report("delete 0006", catalog.delete_book("0006"));
    print!("{}", catalog.display_books());
    print!("{}", catalog.display_members());

    section("10. ERROR HANDLING");
    report("add 0007 (bad genre)", catalog.add_book("0007", "Invalid Genre Book", "Author", "InvalidGenre", 1));
    report("add M004 (bad email)", catalog.add_member("M004", "Invalid Email", "invalid-email"));
    report("M002 borrows 9999", catalog.borrow_book("M002", "9999"));
    report("M002 returns 0001", catalog.return_book("M002", "0001"));

    println!("\n{}", "=".repeat(60));
    println!("DEMO COMPLETED");
    println!("{}", "=".repeat(60));
    Ok(())
}
