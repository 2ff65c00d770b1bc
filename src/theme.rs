// Presentation settings resolved once at startup and passed to the UI.
// With colours disabled every helper returns the text unchanged.

use anyhow::{bail, Context};
use crossterm::style::{Color, Stylize};

use crate::book::{Book, ReadStatus};
use crate::config::ThemeSettings;
use crate::views::Notice;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: bool,
    title: Color,
    header: Color,
    subheader: Color,
}

impl Theme {
    pub fn from_settings(settings: &ThemeSettings) -> anyhow::Result<Self> {
        Ok(Theme {
            colors: settings.colors,
            title: parse_hex(&settings.title).context("theme.title")?,
            header: parse_hex(&settings.header).context("theme.header")?,
            subheader: parse_hex(&settings.subheader).context("theme.subheader")?,
        })
    }

    pub fn without_colors(mut self) -> Self {
        self.colors = false;
        self
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, self.title, true)
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, self.header, true)
    }

    pub fn subheader(&self, text: &str) -> String {
        self.paint(text, self.subheader, false)
    }

    /// `title by author (year) - Read/Unread` with the title bolded and the
    /// status coloured.
    pub fn book_line(&self, book: &Book) -> String {
        if !self.colors {
            return book.summary();
        }
        let status = book.status();
        let status_color = match status {
            ReadStatus::Read => Color::Green,
            ReadStatus::Unread => Color::Red,
        };
        format!(
            "{} by {} ({}) - {}",
            book.title.clone().bold(),
            book.author,
            book.year,
            status.to_string().with(status_color)
        )
    }

    pub fn notice(&self, notice: &Notice) -> String {
        match notice {
            Notice::Success(msg) => self.paint(msg, Color::Green, false),
            Notice::Warning(msg) => self.paint(msg, Color::Yellow, false),
            Notice::Info(msg) => msg.clone(),
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red, true)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.colors {
            return text.to_string();
        }
        let styled = text.to_string().with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// Parse `#rrggbb` (leading `#` optional) into a terminal colour.
pub fn parse_hex(value: &str) -> anyhow::Result<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("'{}' is not a #rrggbb colour", value);
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}
