//! Terminal color utilities using ANSI escape codes.
//!
//! Used for the progress narration and the assignment summary.

use crate::grammar::Role;

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";

    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

/// Deterministic color for a role.
pub fn role_color(role: Role) -> &'static str {
    match role {
        Role::Parent => MAGENTA,
        Role::Child1 => CYAN,
        Role::Child2 => YELLOW,
    }
}

/// Color a role name (bold, role color).
pub fn role(role: Role) -> String {
    format!("{}{}{}{}", BOLD, role_color(role), role.as_str(), RESET)
}

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color error messages (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", RED, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color a label (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color a number/count (bright cyan).
pub fn number(n: impl std::fmt::Display) -> String {
    format!("{}{}{}", BRIGHT_CYAN, n, RESET)
}

/// Emoji constants for consistent usage
pub mod emoji {
    pub const FOLDER: &str = "📁";
    pub const LINK: &str = "🔗";
    pub const TEAM: &str = "👥";
}
