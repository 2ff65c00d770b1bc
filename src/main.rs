// Entrypoint for the CLI application.
// - Keeps `main` small: load settings, start logging, build the API client
//   and theme, then hand them to the UI loop.
// - Returns `anyhow::Result` so startup problems print with context.

use anyhow::Context;
use bookshelf_cli::{api::ApiClient, config::Settings, logging, theme::Theme, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load bookshelf settings")?;
    logging::init(&settings.log)?;

    let api = ApiClient::new(&settings.api)?;
    tracing::debug!(base_url = api.base_url(), "library API configured");

    let mut theme = Theme::from_settings(&settings.theme).context("invalid theme settings")?;
    if std::env::var_os("NO_COLOR").is_some() {
        theme = theme.without_colors();
    }

    // Blocks until the user picks "Exit".
    main_menu(api, theme)?;
    Ok(())
}
