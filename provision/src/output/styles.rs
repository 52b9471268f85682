//! Colors for status marks, field keys and table titles.

use owo_colors::Style;

use super::Mark;

/// Stylesheet for command output. `Default` is uncolored.
#[derive(Default, Clone)]
pub struct Styles {
    pub done: Style,
    pub failed: Style,
    pub empty: Style,
    /// Field keys and the first column of tables.
    pub key: Style,
    pub title: Style,
}

impl Styles {
    /// Stylesheet used when stdout is a color-capable terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            done: Style::new().green(),
            failed: Style::new().red(),
            empty: Style::new().dimmed(),
            key: Style::new().dimmed(),
            title: Style::new().bold(),
        }
    }

    #[must_use]
    pub fn for_mark(&self, mark: Mark) -> Style {
        match mark {
            Mark::Done => self.done,
            Mark::Failed => self.failed,
            Mark::Empty => self.empty,
        }
    }
}
