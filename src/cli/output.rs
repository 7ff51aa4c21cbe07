//! Shared CLI output helpers for consistent terminal output.
//!
//! Colors come from an explicit [`Theme`] value carried by [`Output`];
//! nothing here reads or writes process-wide color state.
//!
//! Color scheme:
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: service names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use std::fmt::Display;

use console::{style, StyledObject};

use crate::core::domain::Kind;

const RULE_WIDTH: usize = 56;

/// Whether output is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors only when configured, not disabled by flag or `NO_COLOR`, and
    /// stdout is a color-capable terminal.
    pub fn detect(configured: bool, disabled: bool) -> Self {
        let color = configured
            && !disabled
            && std::env::var_os("NO_COLOR").is_none()
            && console::colors_enabled();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    fn paint<D>(&self, styled: StyledObject<D>) -> StyledObject<D> {
        styled.force_styling(self.color)
    }
}

/// Terminal printer bound to a theme.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    theme: Theme,
}

impl Output {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Print a success message with checkmark (green).
    ///
    /// Example: `✓ stored github`
    pub fn success(&self, msg: &str) {
        println!("{} {}", self.theme.paint(style("✓").green()), msg);
    }

    /// Print an error message to stderr (red).
    ///
    /// Example: `✗ no entry found for 'bank'`
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", self.theme.paint(style("✗").red()), msg);
    }

    /// Print a warning message to stderr (yellow).
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", self.theme.paint(style("⚠").yellow()), msg);
    }

    /// Print a hint message to stderr (cyan).
    ///
    /// Example: `→ check your passphrase`
    pub fn hint(&self, msg: &str) {
        eprintln!(
            "{} {}",
            self.theme.paint(style("→").cyan()),
            self.theme.paint(style(msg).cyan())
        );
    }

    /// Print a bold section header.
    pub fn header(&self, title: &str) {
        println!("{}", self.theme.paint(style(title).bold()));
    }

    /// Print a key-value pair (label dimmed, value bold).
    ///
    /// Example: `  username:  alice`
    pub fn kv(&self, label: &str, value: impl Display) {
        println!(
            "  {}  {}",
            self.theme.paint(style(label).dim()),
            self.theme.paint(style(value.to_string()).bold())
        );
    }

    /// Print a list item with bullet.
    pub fn list_item(&self, item: &str) {
        println!("  • {}", item);
    }

    /// Print a horizontal rule separator.
    pub fn rule(&self) {
        println!("{}", self.theme.paint(style("─".repeat(RULE_WIDTH)).dim()));
    }

    /// Print a dimmed/secondary message.
    ///
    /// Example: `no services stored`
    pub fn dimmed(&self, msg: &str) {
        println!("{}", self.theme.paint(style(msg).dim()));
    }

    /// Print a section header with a separator line.
    pub fn section(&self, title: &str) {
        println!();
        self.header(title);
        self.rule();
    }

    /// Format a service name in cyan.
    pub fn service(&self, name: &str) -> String {
        self.theme.paint(style(name).cyan()).to_string()
    }

    /// Format a transaction tag, green for income and red for expense.
    pub fn kind(&self, kind: Kind) -> String {
        let label = kind.as_str().to_uppercase();
        let styled = match kind {
            Kind::Income => style(label).green(),
            Kind::Expense => style(label).red(),
        };
        self.theme.paint(styled).to_string()
    }

    /// Format an amount, colored by direction.
    pub fn amount(&self, kind: Kind, amount: f64) -> String {
        let text = format!("${:.2}", amount);
        let styled = match kind {
            Kind::Income => style(text).green(),
            Kind::Expense => style(text).red(),
        };
        self.theme.paint(styled).to_string()
    }
}
