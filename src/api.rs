// API client module: a small blocking HTTP client for the remote books
// collection. Every view makes one or two round trips through it and the
// client keeps no state between calls.

use anyhow::Context;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::book::{Book, BookId, NewBook};
use crate::config::ApiSettings;
use crate::error::{LibraryError, Result};
use crate::filter;

/// Holds a reqwest blocking client and the base URL of the library API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `settings.base_url`, applying the timeout only
    /// when one is configured.
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books/", self.base_url)
    }

    fn book_url(&self, id: &BookId) -> String {
        format!("{}/books/{}", self.base_url, id)
    }

    /// `GET /books/`: the whole collection in server order.
    pub fn list(&self) -> Result<Vec<Book>> {
        let url = self.books_url();
        debug!(%url, "listing books");
        let res = self.client.get(&url).send().map_err(LibraryError::Network)?;
        let books: Vec<Book> = parse(check(res, None)?)?;
        debug!(count = books.len(), "listed books");
        Ok(books)
    }

    /// `POST /books/`. The payload is validated first; nothing is sent if
    /// it fails.
    pub fn create(&self, book: &NewBook) -> Result<Book> {
        book.validate()?;
        let url = self.books_url();
        debug!(%url, title = %book.title, "creating book");
        let res = self
            .client
            .post(&url)
            .json(book)
            .send()
            .map_err(LibraryError::Network)?;
        let created: Book = parse(check(res, None)?)?;
        info!(id = %created.id, title = %created.title, "book added");
        Ok(created)
    }

    /// `DELETE /books/{id}`. Returns the server's copy of the removed book.
    pub fn delete(&self, id: &BookId) -> Result<Book> {
        let url = self.book_url(id);
        debug!(%url, "deleting book");
        let res = self
            .client
            .delete(&url)
            .send()
            .map_err(LibraryError::Network)?;
        let deleted: Book = parse(check(res, Some(id))?)?;
        info!(id = %deleted.id, title = %deleted.title, "book deleted");
        Ok(deleted)
    }

    /// List, then keep books whose title or author contains `term`.
    pub fn search(&self, term: &str) -> Result<Vec<Book>> {
        let books = self.list()?;
        Ok(filter::search_by_text(term, &books))
    }

    /// List, then keep books with the given read flag.
    pub fn by_status(&self, read: bool) -> Result<Vec<Book>> {
        let books = self.list()?;
        Ok(filter::filter_by_status(read, &books))
    }
}

/// Turn non-2xx responses into errors, keeping the body text for context.
/// A 404 on an id-addressed request means the book is gone.
fn check(res: Response, id: Option<&BookId>) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(LibraryError::NotFound { id: id.clone() });
    }
    let body = res.text().unwrap_or_default();
    Err(LibraryError::Status { status, body })
}

fn parse<T: DeserializeOwned>(res: Response) -> Result<T> {
    res.json().map_err(LibraryError::Decode)
}
