//! An in-memory address book.
//!
//! Contacts are looked up by exact name through a hash index and listed in
//! case-insensitive alphabetical order through a singly linked sequence
//! threaded through the same records.
//!
//! ```
//! use contact_book::ContactBook;
//!
//! let mut book = ContactBook::new();
//! book.add("Bob", "111", "b@x.com").unwrap();
//! book.add("alice", "222", "a@x.com").unwrap();
//!
//! let names: Vec<_> = book.display().unwrap().map(|c| c.name()).collect();
//! assert_eq!(names, ["alice", "Bob"]);
//! ```

mod book;
mod error;

pub use book::{Contact, ContactBook, Iter};
pub use error::{BookError, Result};
