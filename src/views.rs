// Action selector and view dispatch.
//
// The menu picks an `Action`; the UI gathers that action's inputs into a
// `Request`; `render` turns the request into a `Screen` using the API
// client and the filters. Nothing here touches the terminal.

use std::fmt;
use tracing::warn;

use crate::api::ApiClient;
use crate::book::{Book, NewBook, ReadStatus};
use crate::error::Result;
use crate::filter;

pub const FAREWELL: &str =
    "Thank you for using the Personal Library Manager! Feel free to come back anytime.";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddBook,
    ViewBooks,
    SearchBook,
    DeleteBook,
    StatusCheck,
    Exit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::AddBook,
        Action::ViewBooks,
        Action::SearchBook,
        Action::DeleteBook,
        Action::StatusCheck,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddBook => "Add Book",
            Action::ViewBooks => "View Books",
            Action::SearchBook => "Search Book",
            Action::DeleteBook => "Delete Book",
            Action::StatusCheck => "Status Check",
            Action::Exit => "Exit",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Action::AddBook => "Add a New Book",
            Action::ViewBooks => "All Books",
            Action::SearchBook => "Search for a Book",
            Action::DeleteBook => "Delete a Book",
            Action::StatusCheck => "View Books by Status",
            Action::Exit => "Goodbye!",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An action together with the inputs collected for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Add(NewBook),
    View,
    Search(String),
    /// `candidates` is the list the selector was built from, so resolving
    /// the title needs no second fetch.
    Delete { title: String, candidates: Vec<Book> },
    Status(ReadStatus),
    Exit,
}

impl Request {
    pub fn action(&self) -> Action {
        match self {
            Request::Add(_) => Action::AddBook,
            Request::View => Action::ViewBooks,
            Request::Search(_) => Action::SearchBook,
            Request::Delete { .. } => Action::DeleteBook,
            Request::Status(_) => Action::StatusCheck,
            Request::Exit => Action::Exit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Info(String),
}

/// What one view displays: a heading, any books, then notices.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub action: Action,
    pub books: Vec<Book>,
    pub notices: Vec<Notice>,
}

impl Screen {
    fn new(action: Action) -> Self {
        Screen {
            action,
            books: Vec::new(),
            notices: Vec::new(),
        }
    }

    fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    fn notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn heading(&self) -> &'static str {
        self.action.heading()
    }

    pub fn is_exit(&self) -> bool {
        self.action == Action::Exit
    }
}

/// Shown instead of the delete selector when the library is empty.
pub fn empty_delete_screen() -> Screen {
    Screen::new(Action::DeleteBook)
        .notice(Notice::Warning("No books available to delete.".into()))
}

/// Produce the screen for a request. Create and delete have remote side
/// effects; every other request only reads.
pub fn render(api: &ApiClient, request: Request) -> Result<Screen> {
    let screen = Screen::new(request.action());
    match request {
        Request::Add(book) => {
            let added = api.create(&book)?;
            Ok(screen.notice(Notice::Success(format!(
                "Book '{}' by {} added successfully!",
                added.title, added.author
            ))))
        }
        Request::View => {
            let books = api.list()?;
            if books.is_empty() {
                Ok(screen.notice(Notice::Warning(
                    "No books available in your library.".into(),
                )))
            } else {
                Ok(screen.with_books(books))
            }
        }
        Request::Search(term) => {
            // Only a missing term is refused; whitespace is searched as typed.
            if term.is_empty() {
                return Ok(screen.notice(Notice::Warning("Please enter a search term.".into())));
            }
            let books = api.search(&term)?;
            if books.is_empty() {
                Ok(screen.notice(Notice::Warning(format!(
                    "No books found matching '{}'.",
                    term
                ))))
            } else {
                Ok(screen.with_books(books))
            }
        }
        Request::Delete { title, candidates } => {
            let Some(target) = filter::find_by_title(&title, &candidates) else {
                return Ok(screen.notice(Notice::Warning(format!(
                    "No book titled '{}' is available to delete.",
                    title
                ))));
            };
            let mut screen = screen;
            let shared = filter::count_title(&title, &candidates);
            if shared > 1 {
                warn!(%title, shared, id = %target.id, "title is ambiguous, deleting first match");
                screen = screen.notice(Notice::Warning(format!(
                    "{} books are titled '{}'; deleting the first one listed.",
                    shared, title
                )));
            }
            let deleted = api.delete(&target.id)?;
            Ok(screen.notice(Notice::Success(format!(
                "Book '{}' by {} deleted successfully!",
                deleted.title, deleted.author
            ))))
        }
        Request::Status(status) => {
            let books = api.by_status(status.is_read())?;
            if books.is_empty() {
                Ok(screen.notice(Notice::Warning(format!(
                    "No {} books available.",
                    status.to_string().to_lowercase()
                ))))
            } else {
                Ok(screen.with_books(books))
            }
        }
        Request::Exit => Ok(screen.notice(Notice::Info(FAREWELL.into()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_order_matches_labels() {
        let labels: Vec<_> = Action::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["Add Book", "View Books", "Search Book", "Delete Book", "Status Check", "Exit"]
        );
    }

    #[test]
    fn requests_map_back_to_actions() {
        assert_eq!(Request::View.action(), Action::ViewBooks);
        assert_eq!(Request::Search("x".into()).action(), Action::SearchBook);
        assert_eq!(Request::Status(ReadStatus::Read).action(), Action::StatusCheck);
        assert_eq!(Request::Exit.action(), Action::Exit);
    }

    #[test]
    fn empty_delete_screen_warns() {
        let screen = empty_delete_screen();
        assert_eq!(screen.heading(), "Delete a Book");
        assert_eq!(
            screen.notices,
            vec![Notice::Warning("No books available to delete.".into())]
        );
    }
}
