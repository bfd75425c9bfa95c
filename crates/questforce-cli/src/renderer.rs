//! Terminal output for the markdown produced by the core display types
//!
//! Rich mode styles markdown with termimad; plain mode (`--no-color`) prints
//! the markdown untouched so it can be piped or asserted on in tests.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        Self { rich_enabled, skin }
    }

    /// Writes `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            // Headers keep their hashes so dashboard sections stay scannable.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[36m{line}\x1b[0m")
                } else {
                    writeln!(out, "{}", self.skin.inline(line))
                }
                .context("Failed to write to stdout")?;
            }
        } else {
            write!(out, "{markdown}").context("Failed to write to stdout")?;
        }
        out.flush().context("Failed to flush stdout")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
