use thiserror::Error;

pub const USAGE: &str = "Usage: secret-santa <names.txt> [exclusions.txt] [lastyear.txt]

Example names.txt:

Alice
Bob
Charles
Daisy

Example exclusions.txt where Alice cannot buy for Charles and vice-versa,
and Charles also cannot buy for Daisy:

2
Alice
1
Charles
Charles
2
Alice
Daisy

Example lastyear.txt, matching the output of last year's run, which is used as
additional exclusions:

Alice buys for Charles
Charles buys for Daisy
Daisy buys for Alice

Note that not all names need to be included in the latter two files.";

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("{message}")]
    Usage { message: String },

    #[error("Need at least {required} names in {path} (found {found})")]
    TooFewNames {
        path: String,
        found: usize,
        required: usize,
    },

    #[error("{path} contains an unknown name: {name}")]
    UnknownName { path: String, name: String },

    #[error("{path} was empty or improperly formatted: {reason}")]
    MalformedFile { path: String, reason: String },

    #[error("{path} is not valid UTF-8 text")]
    InvalidEncoding { path: String },

    #[error("Could not read {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not find a valid arrangement (too many exclusions)")]
    NoValidArrangement { attempts: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Validation,
    Io,
    Configuration,
    Arrangement,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::Usage { .. } => ErrorCategory::Usage,
            SantaError::TooFewNames { .. }
            | SantaError::UnknownName { .. }
            | SantaError::MalformedFile { .. }
            | SantaError::InvalidEncoding { .. }
            | SantaError::InvalidConfigValueError { .. } => ErrorCategory::Validation,
            SantaError::ReadError { .. }
            | SantaError::WriteError { .. }
            | SantaError::SerializationError(_) => ErrorCategory::Io,
            SantaError::ConfigError { .. } => ErrorCategory::Configuration,
            SantaError::NoValidArrangement { .. } => ErrorCategory::Arrangement,
        }
    }

    /// 依錯誤類別決定行程退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage | ErrorCategory::Validation | ErrorCategory::Configuration => 1,
            ErrorCategory::Io => 2,
            ErrorCategory::Arrangement => 3,
        }
    }

    /// 給終端使用者的訊息，格式錯誤時附上完整用法說明
    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::Usage { .. } | SantaError::MalformedFile { .. } => {
                format!("{}\n\n{}", self, USAGE)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::Usage { .. } => "Pass a names file, optionally followed by an exclusions file and last year's results",
            SantaError::TooFewNames { .. } => "Add more unique names to the names file",
            SantaError::UnknownName { .. } => "Make sure every name in the file also appears in the names file",
            SantaError::MalformedFile { .. } => "Compare the file against the examples in the usage text",
            SantaError::InvalidEncoding { .. } => "Save the file as UTF-8 text",
            SantaError::ReadError { .. } => "Check that the file exists and is readable",
            SantaError::WriteError { .. } => "Check that the output directory exists and is writable",
            SantaError::ConfigError { .. } | SantaError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            SantaError::SerializationError(_) => "Try the text output format",
            SantaError::NoValidArrangement { .. } => {
                "Remove some exclusions or raise --max-attempts"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
