// UI layer: the interactive menu built on `dialoguer`. Each pass collects
// the inputs for one action, hands a `Request` to `views::render` and
// prints the resulting `Screen`.

use crate::api::ApiClient;
use crate::book::{validate_year, NewBook, ReadStatus, MAX_YEAR};
use crate::error::{LibraryError, Result as LibraryResult};
use crate::filter;
use crate::theme::Theme;
use crate::views::{self, Action, Request, Screen};
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Main interactive menu. Runs until the user picks "Exit".
///
/// `Select::interact()` is keyboard-driven: arrow keys and Enter.
pub fn main_menu(api: ApiClient, theme: Theme) -> Result<()> {
    println!("{}", theme.title("Personal Library Manager"));
    loop {
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let selection = Select::new()
            .with_prompt("Select Action")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = Action::ALL[selection];

        println!();
        println!("{}", theme.header(action.heading()));

        let outcome = match collect_request(&api, &theme, action)? {
            Gathered::Request(request) => match spinner_message(action) {
                Some(message) => with_spinner(message, || views::render(&api, request)),
                None => views::render(&api, request),
            },
            Gathered::Screen(screen) => Ok(screen),
            Gathered::Failed(e) => Err(e),
        };

        match outcome {
            Ok(screen) => {
                print_screen(&theme, &screen);
                if screen.is_exit() {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!(error = ?e, action = %action, "view failed");
                println!("{}", theme.error(&format!("{} failed: {}", action, e)));
            }
        }
        println!();
    }
    Ok(())
}

/// Either a request to render, a screen that is already known without
/// further calls (e.g. nothing to delete), or a failed lookup.
enum Gathered {
    Request(Request),
    Screen(Screen),
    Failed(LibraryError),
}

fn collect_request(api: &ApiClient, theme: &Theme, action: Action) -> Result<Gathered> {
    let request = match action {
        Action::AddBook => {
            println!("{}", theme.subheader("Fill in the details below to add a new book:"));
            Request::Add(prompt_new_book()?)
        }
        Action::ViewBooks => Request::View,
        Action::SearchBook => {
            let term: String = Input::new()
                .with_prompt("Enter title or author to search")
                .allow_empty(true)
                .interact_text()?;
            Request::Search(term)
        }
        Action::DeleteBook => {
            let candidates = match with_spinner("Loading books...", || api.list()) {
                Ok(books) => books,
                Err(e) => return Ok(Gathered::Failed(e)),
            };
            if candidates.is_empty() {
                return Ok(Gathered::Screen(views::empty_delete_screen()));
            }
            let titles = filter::titles(&candidates);
            let index = Select::new()
                .with_prompt("Select a book to delete")
                .items(&titles)
                .default(0)
                .interact()?;
            Request::Delete {
                title: titles[index].clone(),
                candidates,
            }
        }
        Action::StatusCheck => {
            let labels: Vec<String> = ReadStatus::ALL.iter().map(|s| s.to_string()).collect();
            let index = Select::new()
                .with_prompt("Select status")
                .items(&labels)
                .default(0)
                .interact()?;
            Request::Status(ReadStatus::ALL[index])
        }
        Action::Exit => Request::Exit,
    };
    Ok(Gathered::Request(request))
}

/// Collect the Add form. The year prompt re-asks until it is in range; the
/// remaining checks run in `NewBook::validate` before anything is sent.
fn prompt_new_book() -> Result<NewBook> {
    let title: String = Input::new().with_prompt("Title").interact_text()?;
    let author: String = Input::new().with_prompt("Author").interact_text()?;
    let year: i32 = Input::new()
        .with_prompt(format!("Year of Publication (0-{})", MAX_YEAR))
        .validate_with(|y: &i32| validate_year(*y))
        .interact_text()?;
    let genre: String = Input::new()
        .with_prompt("Genre")
        .allow_empty(true)
        .interact_text()?;
    let read = Confirm::new()
        .with_prompt("Have you read this book?")
        .default(true)
        .interact()?;

    Ok(NewBook {
        title,
        author,
        year,
        genre,
        read: ReadStatus::from_answer(read).is_read(),
    })
}

/// `None` for actions that make no request.
fn spinner_message(action: Action) -> Option<&'static str> {
    match action {
        Action::AddBook => Some("Adding book..."),
        Action::DeleteBook => Some("Deleting book..."),
        Action::ViewBooks | Action::SearchBook | Action::StatusCheck => Some("Loading books..."),
        Action::Exit => None,
    }
}

/// Show an indicatif spinner while `f` runs, then clear it so it never
/// mixes with the printed screen.
fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> LibraryResult<T>) -> LibraryResult<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}

fn print_screen(theme: &Theme, screen: &Screen) {
    for book in &screen.books {
        println!("{}", theme.book_line(book));
    }
    for notice in &screen.notices {
        println!("{}", theme.notice(notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_shows_no_spinner() {
        assert_eq!(spinner_message(Action::Exit), None);
    }

    #[test]
    fn every_request_making_action_has_a_spinner() {
        for action in Action::ALL.iter().filter(|a| **a != Action::Exit) {
            assert!(spinner_message(*action).is_some(), "{} has no spinner", action);
        }
    }
}
