//! Terminal output for command handlers.
//!
//! Status lines and tables are for people and respect `--quiet`. Failures
//! go to stderr. Bare values are printed unstyled so scripts can capture them.

pub mod styles;

use std::borrow::Cow;

use console::{Alignment, Term, measure_text_width, pad_str};
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Marker printed in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The command did what was asked.
    Done,
    /// The command ran but its effect did not happen.
    Failed,
    /// There was nothing to act on or show.
    Empty,
}

impl Mark {
    fn glyph(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::Failed => "✗",
            Self::Empty => "·",
        }
    }
}

pub struct OutputContext {
    pub styles: Styles,
    /// Suppress everything except failures and bare values.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are used only when stdout is a terminal, `--no-color` is off
    /// and `NO_COLOR` is unset.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let colored =
            !no_color && Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();
        Self {
            styles: if colored {
                Styles::colored()
            } else {
                Styles::default()
            },
            quiet,
        }
    }

    /// Print a status line. `Failed` lines go to stderr even when quiet.
    pub fn status(&self, mark: Mark, msg: &str) {
        let line = format!("  {} {msg}", mark.glyph().style(self.styles.for_mark(mark)));
        match mark {
            Mark::Failed => eprintln!("{line}"),
            Mark::Done | Mark::Empty if !self.quiet => println!("{line}"),
            Mark::Done | Mark::Empty => {}
        }
    }

    /// Print an indented `key  value` detail under a status line.
    pub fn field(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("    {}  {value}", key.style(self.styles.key));
        }
    }

    /// Print `rows` as left-aligned columns under `title`.
    pub fn table(&self, title: &str, rows: &[Vec<String>]) {
        if self.quiet {
            return;
        }
        println!("  {}", title.style(self.styles.title));
        for line in self.render_rows(rows) {
            println!("    {line}");
        }
    }

    /// Relay output captured from a unit, trailing whitespace trimmed.
    pub fn relay(&self, text: &str) {
        if !self.quiet && !text.trim().is_empty() {
            println!("{}", text.trim_end());
        }
    }

    /// Print a bare value for scripting (`$(tsuru-provision ip app)`).
    /// Never suppressed.
    pub fn value(&self, value: &str) {
        println!("{value}");
    }

    fn render_rows(&self, rows: &[Vec<String>]) -> Vec<String> {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure_text_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        rows.iter()
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .enumerate()
                    .map(|(i, (cell, &width))| {
                        let cell = if i + 1 < row.len() {
                            pad_str(cell, width, Alignment::Left, None)
                        } else {
                            Cow::Borrowed(cell.as_str())
                        };
                        if i == 0 {
                            cell.style(self.styles.key).to_string()
                        } else {
                            cell.into_owned()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}
