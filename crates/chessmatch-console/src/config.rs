//! Terminal presentation settings.

use std::ffi::OsString;

/// Disables ANSI colors when set to a non-empty value.
pub const NO_COLOR_VAR: &str = "NO_COLOR";
/// Disables clearing the screen between redraws when set to a non-empty value.
pub const NO_CLEAR_VAR: &str = "CHESSMATCH_NO_CLEAR";

/// How the shell draws the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Emit ANSI color escapes for pieces and highlighted squares.
    pub color: bool,
    /// Clear the terminal before every redraw.
    pub clear_screen: bool,
    /// Redraw with the selected piece's moves highlighted before asking
    /// for the target.
    pub show_hints: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            show_hints: true,
        }
    }
}

impl ConsoleConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build the config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let is_set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        Self {
            color: !is_set(NO_COLOR_VAR),
            clear_screen: !is_set(NO_CLEAR_VAR),
            ..Self::default()
        }
    }

    /// Plain output: no colors, no screen clearing. Hints stay on.
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            show_hints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::{ConsoleConfig, NO_CLEAR_VAR, NO_COLOR_VAR};

    #[test]
    fn defaults_enable_everything() {
        let config = ConsoleConfig::from_lookup(|_| None);
        assert_eq!(config, ConsoleConfig::default());
        assert!(config.color && config.clear_screen && config.show_hints);
    }

    #[test]
    fn no_color_disables_color() {
        let config = ConsoleConfig::from_lookup(|key| {
            (key == NO_COLOR_VAR).then(|| OsString::from("1"))
        });
        assert!(!config.color);
        assert!(config.clear_screen);
    }

    #[test]
    fn empty_values_are_ignored() {
        let config = ConsoleConfig::from_lookup(|_| Some(OsString::new()));
        assert!(config.color);
        assert!(config.clear_screen);
    }

    #[test]
    fn no_clear_disables_clearing() {
        let config = ConsoleConfig::from_lookup(|key| {
            (key == NO_CLEAR_VAR).then(|| OsString::from("yes"))
        });
        assert!(config.color);
        assert!(!config.clear_screen);
    }
}
