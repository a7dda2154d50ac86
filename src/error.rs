use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("PagerError: {0}")]
    Pager(#[from] PagerError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("UtilsError: {0}")]
    Utils(#[from] UtilsError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
    #[error("Collection format error in {path}: {message}")]
    CollectionFormat { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Page size must be greater than 0")]
    InvalidPageSize,
    #[error("No control bound to element '{id}'")]
    UnknownControl { id: String },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
}

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigDirNotFound => ErrorSeverity::Critical,
                StorageError::CollectionFormat { .. } => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Pager(pager_error) => match pager_error {
                PagerError::InvalidPageSize => ErrorSeverity::High,
                PagerError::UnknownControl { .. } => ErrorSeverity::Low,
            },
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Utils(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Pager(PagerError::InvalidPageSize) => {
                Some("Pass --page-size with a value of at least 1".to_string())
            }
            AppError::Pager(PagerError::UnknownControl { .. }) => {
                Some("Run 'controls' to list the clickable element ids".to_string())
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(
                "Known keys: page_size, search_mode, clamp_pages, regions.list, regions.pagination, regions.search"
                    .to_string(),
            ),
            AppError::Storage(StorageError::CollectionFormat { .. }) => Some(
                "Collections are either a JSON array of strings or markup with <li> items"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("page must be a number".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: page must be a number"
        );

        let cli_err = CliError::UnknownCommand {
            command: "jump".to_string(),
        };
        assert_eq!(format!("{}", cli_err), "Unknown command: jump");
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "page_size".to_string(),
            value: "zero".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Invalid configuration value for 'page_size': zero (not a number)"
        );
        assert!(matches!(config_err, ConfigError::InvalidValue { .. }));
        if let ConfigError::InvalidValue {
            field,
            value,
            reason,
        } = config_err
        {
            assert_eq!(field, "page_size");
            assert_eq!(value, "zero");
            assert_eq!(reason, "not a number");
        }
    }

    #[test]
    fn test_pager_error_display() {
        assert_eq!(
            format!("{}", PagerError::InvalidPageSize),
            "Page size must be greater than 0"
        );
        assert_eq!(
            format!(
                "{}",
                PagerError::UnknownControl {
                    id: "page-link-9".to_string()
                }
            ),
            "No control bound to element 'page-link-9'"
        );
    }

    #[test]
    fn test_app_error_wrapping() {
        let app_err: AppError = PagerError::InvalidPageSize.into();
        assert_eq!(
            format!("{}", app_err),
            "PagerError: Page size must be greater than 0"
        );
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert!(app_err.troubleshooting_hint().is_some());

        let app_err = AppError::Utils(UtilsError::Validation {
            message: "Invalid input".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert_eq!(
            format!("{}", app_err),
            "UtilsError: Validation error: Invalid input"
        );
        assert!(app_err.troubleshooting_hint().is_none());
    }

    #[test]
    fn test_storage_error_severity() {
        let app_err = AppError::Storage(StorageError::CollectionFormat {
            path: "students.html".to_string(),
            message: "unterminated <li>".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert_eq!(
            format!("{}", app_err),
            "StorageError: Collection format error in students.html: unterminated <li>"
        );

        let app_err = AppError::Storage(StorageError::ConfigDirNotFound);
        assert_eq!(app_err.severity(), ErrorSeverity::Critical);
        assert_eq!(app_err.severity().emoji(), "🚨");
    }
}
