//! Stylesheet for terminal output.

use owo_colors::Style;

/// The styles the CLI prints with. `Styles::default()` renders plain text;
/// [`Styles::colored`] is the ANSI palette used on color-capable terminals.
#[derive(Default, Clone)]
pub struct Styles {
    /// Completed steps and the final ready line.
    pub success: Style,
    /// Tolerated problems, like the appliance going quiet mid-upgrade.
    pub warning: Style,
    /// Fatal failures.
    pub error: Style,
    /// In-progress steps and informational notes.
    pub info: Style,
    /// Secondary detail, like the key column of output listings.
    pub dim: Style,
    /// Section titles.
    pub header: Style,
}

impl Styles {
    /// The ANSI palette.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().cyan(),
            dim: Style::new().dimmed(),
            header: Style::new().bold(),
        }
    }
}
