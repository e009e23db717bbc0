//! Contact Book - demonstration walkthrough
//!
//! Builds a small address book, edits and looks up phone numbers, and
//! prints the book after each step.

use anyhow::{Context, Result};
use contact_book::{AddressBook, Record};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so the walkthrough output on stdout stays clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = AddressBook::new();

    // Create a record for John with two numbers
    let mut john_record = Record::new("John");
    john_record.add_phone("1234567890")?;
    john_record.add_phone("5555555555")?;
    book.add_record(john_record);

    // Create and add a record for Jane
    let mut jane_record = Record::new("Jane");
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    info!("Address book populated with {} records", book.len());

    // Print every record in the book
    println!("{}", book);

    // Find John and edit one of his numbers
    let john = book
        .find_mut("John")
        .context("record for John is missing")?;
    john.edit_phone("1234567890", "1112223333")?;

    println!("{}", john); // Contact name: John, phones: 5555555555; 1112223333

    // Look up a specific number in John's record
    let found_phone = john
        .find_phone("5555555555")
        .context("phone 5555555555 is missing from John's record")?;
    println!("{}: {}", john.name(), found_phone); // John: 5555555555

    // Delete Jane's record
    book.delete("Jane");
    println!("{}", book);

    Ok(())
}
