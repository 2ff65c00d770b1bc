// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together into the interactive menu.
//
// Module responsibilities:
// - `book`: the Book record, read status and client-side validation.
// - `api`: blocking HTTP client for the remote `/books/` collection.
// - `filter`: pure in-memory search and status filters.
// - `views`: the action selector and the dispatch from a request to a
//   renderable `Screen`.
// - `ui`: terminal prompts and printing; delegates work to `views`.
// - `config`, `logging`, `theme`, `error`: settings, tracing, presentation
//   and the error taxonomy shared by everything above.
pub mod api;
pub mod book;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod views;
