//! crates/logging/src/config.rs
//! Threshold and decoration toggles consulted by every log call.

use super::severity::Severity;

/// Logger configuration: the minimum severity and the four decoration toggles.
///
/// The value is `Copy` so the process-wide default can hand out snapshots
/// without holding its lock while a line is formatted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    level: Severity,
    show_path: bool,
    show_file_name: bool,
    show_function: bool,
    show_line: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LogConfig {
    /// Creates the default configuration: every severity admitted and every
    /// decoration shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: Severity::All,
            show_path: true,
            show_file_name: true,
            show_function: true,
            show_line: true,
        }
    }

    /// Creates a configuration with the given threshold and every decoration hidden.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{LogConfig, Severity};
    ///
    /// let config = LogConfig::plain(Severity::Warn);
    /// assert_eq!(config.level(), Severity::Warn);
    /// assert!(!config.is_path_showing());
    /// assert!(!config.is_line_showing());
    /// ```
    #[must_use]
    pub const fn plain(level: Severity) -> Self {
        Self {
            level,
            show_path: false,
            show_file_name: false,
            show_function: false,
            show_line: false,
        }
    }

    /// Returns the minimum severity that is emitted.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Sets the minimum severity that is emitted.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Reports whether a message at `severity` passes the configured gate.
    #[must_use]
    pub const fn check_level(&self, severity: Severity) -> bool {
        self.level.admits(severity)
    }

    /// Shows the directory portion of the source path.
    pub fn show_path(&mut self) {
        self.show_path = true;
    }

    /// Hides the directory portion of the source path.
    pub fn hide_path(&mut self) {
        self.show_path = false;
    }

    /// Reports whether the directory portion of the source path is shown.
    #[must_use]
    pub const fn is_path_showing(&self) -> bool {
        self.show_path
    }

    /// Shows the source file name.
    pub fn show_file_name(&mut self) {
        self.show_file_name = true;
    }

    /// Hides the source file name.
    pub fn hide_file_name(&mut self) {
        self.show_file_name = false;
    }

    /// Reports whether the source file name is shown.
    #[must_use]
    pub const fn is_file_name_showing(&self) -> bool {
        self.show_file_name
    }

    /// Shows the calling function's name.
    pub fn show_function(&mut self) {
        self.show_function = true;
    }

    /// Hides the calling function's name.
    pub fn hide_function(&mut self) {
        self.show_function = false;
    }

    /// Reports whether the calling function's name is shown.
    #[must_use]
    pub const fn is_function_showing(&self) -> bool {
        self.show_function
    }

    /// Shows the source line number.
    pub fn show_line(&mut self) {
        self.show_line = true;
    }

    /// Hides the source line number.
    pub fn hide_line(&mut self) {
        self.show_line = false;
    }

    /// Reports whether the source line number is shown.
    #[must_use]
    pub const fn is_line_showing(&self) -> bool {
        self.show_line
    }

    /// Builder-style helper returning a copy with the threshold replaced.
    #[must_use]
    pub const fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Builder-style helper returning a copy with all four toggles set to `show`.
    #[must_use]
    pub const fn with_decorations(mut self, show: bool) -> Self {
        self.show_path = show;
        self.show_file_name = show;
        self.show_function = show;
        self.show_line = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_admits_everything_and_shows_all_decorations() {
        let config = LogConfig::default();
        assert_eq!(config.level(), Severity::All);
        assert!(config.is_path_showing());
        assert!(config.is_file_name_showing());
        assert!(config.is_function_showing());
        assert!(config.is_line_showing());
    }

    #[test]
    fn toggles_are_independent() {
        let mut config = LogConfig::default();
        config.hide_path();
        config.hide_line();

        assert!(!config.is_path_showing());
        assert!(config.is_file_name_showing());
        assert!(config.is_function_showing());
        assert!(!config.is_line_showing());

        config.show_path();
        config.hide_function();
        assert!(config.is_path_showing());
        assert!(!config.is_function_showing());
        assert!(!config.is_line_showing());
    }

    #[test]
    fn check_level_follows_threshold() {
        let mut config = LogConfig::default();
        config.set_level(Severity::Warn);

        assert!(config.check_level(Severity::Fatal));
        assert!(config.check_level(Severity::Error));
        assert!(config.check_level(Severity::Warn));
        assert!(!config.check_level(Severity::Info));
        assert!(!config.check_level(Severity::Trace));
    }

    #[test]
    fn with_decorations_flips_all_toggles() {
        let config = LogConfig::default().with_decorations(false);
        assert_eq!(config, LogConfig::plain(Severity::All));

        let config = config.with_decorations(true).with_level(Severity::Debug);
        assert!(config.is_file_name_showing());
        assert_eq!(config.level(), Severity::Debug);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_documents_over_defaults() {
        let config: LogConfig =
            serde_json::from_str(r#"{"level":"warn","show_line":false}"#).expect("valid config");
        assert_eq!(config.level(), Severity::Warn);
        assert!(!config.is_line_showing());
        assert!(config.is_path_showing());
    }
}
