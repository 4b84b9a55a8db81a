//! Book entity types shared between the API client, the cache, and the UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lending status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Issued,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }

    /// Parse a status from its display form. Empty input is `None`.
    pub fn parse(value: &str) -> Option<BookStatus> {
        match value {
            "Available" => Some(BookStatus::Available),
            "Issued" => Some(BookStatus::Issued),
            _ => None,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored inventory record.
///
/// The identifier is assigned by the store and is never sent back on writes;
/// mutations go through [`BookFields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(rename = "publishedYear")]
    pub published_year: i32,
    pub status: BookStatus,
}

/// Write payload: a book minus its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(rename = "publishedYear")]
    pub published_year: i32,
    pub status: BookStatus,
}

impl Book {
    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            published_year: self.published_year,
            status: self.status,
        }
    }
}
