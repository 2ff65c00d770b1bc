// Book data model: the record stored by the remote API, the payload used
// to create one, and the client-side checks applied before creating.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LibraryError, Result};

/// Latest publication year accepted by the Add form.
pub const MAX_YEAR: i32 = 2025;
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_AUTHOR_CHARS: usize = 100;
pub const MAX_GENRE_CHARS: usize = 50;

/// Identifier assigned by the server. Backends differ on whether this is
/// an integer or a string, so both are accepted and echoed back as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum BookId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{}", n),
            BookId::Text(s) => f.write_str(s),
        }
    }
}

/// A book as returned by `GET /books/`, `POST /books/` and `DELETE /books/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    pub fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }

    /// One-line listing, e.g. `Dune by Frank Herbert (1965) - Read`.
    pub fn summary(&self) -> String {
        format!(
            "{} by {} ({}) - {}",
            self.title,
            self.author,
            self.year,
            self.status()
        )
    }
}

/// Payload for `POST /books/`. The server assigns the id, so there is
/// no id field on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub read: bool,
}

impl NewBook {
    /// Reject payloads the Add form would not have let through.
    pub fn validate(&self) -> Result<()> {
        check_required("title", &self.title, MAX_TITLE_CHARS)?;
        check_required("author", &self.author, MAX_AUTHOR_CHARS)?;
        check_length("genre", &self.genre, MAX_GENRE_CHARS)?;
        validate_year(self.year).map_err(LibraryError::Validation)
    }
}

/// Shared with the year prompt so the form can re-ask instead of failing.
pub fn validate_year(year: i32) -> std::result::Result<(), String> {
    if (0..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(format!("year must be between 0 and {}, got {}", MAX_YEAR, year))
    }
}

fn check_required(field: &str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(format!("{} must not be empty", field)));
    }
    check_length(field, value, max)
}

fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(LibraryError::validation(format!(
            "{} is {} characters long, the limit is {}",
            field, len, max
        )));
    }
    Ok(())
}

/// Whether a book has been read. The API stores this as a plain boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl ReadStatus {
    pub const ALL: [ReadStatus; 2] = [ReadStatus::Read, ReadStatus::Unread];

    pub fn is_read(self) -> bool {
        matches!(self, ReadStatus::Read)
    }

    /// Maps the Add form's "Have you read this book?" answer.
    pub fn from_answer(yes: bool) -> Self {
        Self::from(yes)
    }
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read {
            ReadStatus::Read
        } else {
            ReadStatus::Unread
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStatus::Read => f.write_str("Read"),
            ReadStatus::Unread => f.write_str("Unread"),
        }
    }
}
