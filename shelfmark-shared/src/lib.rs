//! Types and functions shared by App and Server

pub mod actions;
pub mod countdown;
pub mod csrf;
pub mod dates;
pub mod dropdown;
pub mod filter;
pub mod numbers;
pub mod response;
pub mod search;
pub mod timers;
pub mod timestamp;
pub mod urls;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The message shown in every list that came back empty
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to display here.";

/// The message shown to the user for every hard error
///
/// The details only ever go to the console.
pub const GENERIC_ERROR_MESSAGE: &str = "An error has occurred!";

/// The short version of a book used in featured sections
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BookSummary {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    /// path below the media root; may be empty
    #[serde(default)]
    pub cover: String,
}

/// One featured block on the home, library or genre page
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct FeaturedSection {
    pub title: String,
    pub books: Vec<BookSummary>,
}

/// A book as returned by the book search
///
/// The search returns every column of the book, but only ISBN and title are guaranteed to be
/// present.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Book {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub description: Option<String>,
    /// formatted as `YYYY-MM-DD`
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub available_quantity: Option<u64>,
    #[serde(default)]
    pub total_quantity: Option<u64>,
    #[serde(default)]
    pub borrow_count: Option<u64>,
}
impl Book {
    /// Can another copy of this book be borrowed right now?
    ///
    /// Books without quantity information are assumed to be available; the backend will reject
    /// the borrow otherwise.
    pub fn is_available(&self) -> bool {
        self.available_quantity.is_none_or(|q| q > 0)
    }
}
impl From<BookSummary> for Book {
    fn from(value: BookSummary) -> Self {
        Self {
            id: 0,
            isbn: value.isbn,
            title: value.title,
            author: String::default(),
            cover: value.cover,
            description: None,
            date_published: None,
            available_quantity: None,
            total_quantity: None,
            borrow_count: None,
        }
    }
}

/// The response of the book search endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct SearchBooksResponse {
    pub books: Vec<Book>,
    #[serde(default)]
    pub is_staff: bool,
}

/// A borrow record of the current user, with the book columns flattened in
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct BorrowRecord {
    pub id: i64,
    #[serde(rename = "book__id", default)]
    pub book_id: i64,
    #[serde(rename = "book__ISBN")]
    pub book_isbn: String,
    #[serde(rename = "book__title")]
    pub book_title: String,
    #[serde(rename = "book__author", default)]
    pub book_author: String,
    #[serde(rename = "book__cover", default)]
    pub book_cover: String,
    #[serde(with = "timestamp::serde_timestamp")]
    pub borrow_date: OffsetDateTime,
    #[serde(with = "timestamp::serde_timestamp")]
    pub due_date: OffsetDateTime,
    #[serde(with = "timestamp::serde_timestamp::option", default)]
    pub return_date: Option<OffsetDateTime>,
}
impl BorrowRecord {
    /// Has the book of this record not been returned yet?
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    /// The book this record is about, as far as the record knows it
    pub fn book(&self) -> Book {
        Book {
            id: self.book_id,
            isbn: self.book_isbn.clone(),
            title: self.book_title.clone(),
            author: self.book_author.clone(),
            cover: self.book_cover.clone(),
            description: None,
            date_published: None,
            available_quantity: None,
            total_quantity: None,
            borrow_count: None,
        }
    }
}

/// A borrow record as returned by the record search
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct RecordSummary {
    pub id: i64,
    #[serde(rename = "book__id", default)]
    pub book_id: i64,
    #[serde(rename = "book__ISBN")]
    pub book_isbn: String,
    #[serde(rename = "book__title")]
    pub book_title: String,
    #[serde(rename = "book__author", default)]
    pub book_author: String,
    #[serde(rename = "book__cover", default)]
    pub book_cover: String,
}

/// Configuration handed to the client by the server for every page
///
/// This replaces the JSON blobs the backend used to embed into its templates.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PageConfig {
    /// All genres, in display order
    pub genres: Vec<String>,
    /// The filter the book search starts out with
    pub default_filter: filter::SearchFilter,
}

#[cfg(test)]
mod test;
