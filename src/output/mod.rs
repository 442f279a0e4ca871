//! Terminal output: stylesheet, message helpers, and spinners.

#![allow(dead_code)] // Not every command uses every helper yet

pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Width of the key column in [`OutputContext::kv`] listings.
const KV_KEY_WIDTH: usize = 10;

/// Styling and terminal state shared by everything a command prints.
pub struct OutputContext {
    /// Active stylesheet.
    pub styles: Styles,
    /// Whether stdout is a terminal.
    pub is_tty: bool,
    /// Suppress everything except errors.
    pub quiet: bool,
}

impl OutputContext {
    /// Build the context from CLI flags and the environment. Color is used
    /// only when stdout is a terminal, `--no-color` was not passed, and
    /// `NO_COLOR` is unset.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let styles = if !no_color && is_tty && std::env::var_os("NO_COLOR").is_none() {
            Styles::colored()
        } else {
            Styles::default()
        };

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Whether spinners should be drawn at all.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// `✓ {msg}`, suppressed when quiet.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// `⚠ {msg}`, suppressed when quiet.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// `✗ {msg}` on stderr. Errors print even in quiet mode.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// `ℹ {msg}`, suppressed when quiet.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Section title, suppressed when quiet.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// One row of a key/value listing, keys padded into an aligned column.
    /// Suppressed when quiet.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            let key = format!("{key:<width$}", width = KV_KEY_WIDTH);
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}
