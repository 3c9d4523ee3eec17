use thiserror::Error;

/// The line printed when the program runs.
pub const DEFAULT_NOTICE: &str = "Skrypt do tłumaczenia będzie wykonany z poziomu edytora...";

/// Log level used unless overridden in code.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Level names accepted by `Settings::log_level`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// Name of the offending field (e.g., "logLevel")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),
}

/// Renders errors as a numbered list, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Single line written to stdout.
    pub notice: String,

    /// `tracing` level directive for stderr logging.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { notice: DEFAULT_NOTICE.to_string(), log_level: DEFAULT_LOG_LEVEL.to_string() }
    }
}

impl Settings {
    /// 設定値を検証し、見つかったエラーをすべて返す
    ///
    /// # Errors
    /// - `notice` が空、または改行を含む
    /// - `logLevel` が既知のレベルではない
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.notice.trim().is_empty() {
            errors.push(ValidationError::new("notice", "The notice cannot be empty"));
        }

        if self.notice.contains(['\n', '\r']) {
            errors.push(ValidationError::new(
                "notice",
                "The notice must fit on a single line. Remove any line breaks",
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            errors.push(ValidationError::new(
                "logLevel",
                format!(
                    "Unknown log level '{}'. Expected one of: {}",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
