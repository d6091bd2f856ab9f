//! Visual theme and styling.

use console::Style;

/// Terminal styles for command output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (bold magenta).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for diff additions (green).
    pub added: Style,
    /// Style for diff removals (red).
    pub removed: Style,
    /// Style for diff changes (yellow).
    pub changed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            dim: Style::new().dim(),
            added: Style::new().green(),
            removed: Style::new().red(),
            changed: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
            added: Style::new(),
            removed: Style::new(),
            changed: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Color a diff line by its leading marker (`+`, `-`, `~`).
    pub fn format_diff_line(&self, line: &str) -> String {
        let style = match line.chars().next() {
            Some('+') => &self.added,
            Some('-') => &self.removed,
            Some('~') => &self.changed,
            _ => &self.dim,
        };
        format!("{}", style.apply_to(line))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
