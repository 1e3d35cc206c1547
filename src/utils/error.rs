use thiserror::Error;

#[derive(Error, Debug)]
pub enum DupesError {
    #[error("Cannot read input {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input {path} is not valid JSON: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input {path} must be a JSON array of objects, found {found}")]
    NotAnArrayError { path: String, found: String },

    #[error("Input {path}: element {index} must be an object, found {found}")]
    NotAnObjectError {
        path: String,
        index: usize,
        found: String,
    },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Record {index} has no '{field}' field")]
    MissingFieldError { index: usize, field: String },

    #[error("Record {index}: '{field}' must be a string, found {found}")]
    NotTextError {
        index: usize,
        field: String,
        found: String,
    },
}

/// The two failure families of a run. Both are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Source missing, unreadable, not JSON, or not an array of objects.
    Input,
    /// A record lacks a usable `name`.
    Schema,
}

impl DupesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DupesError::IoError { .. }
            | DupesError::ParseError { .. }
            | DupesError::NotAnArrayError { .. }
            | DupesError::NotAnObjectError { .. }
            | DupesError::InvalidConfigValueError { .. } => ErrorCategory::Input,
            DupesError::MissingFieldError { .. } | DupesError::NotTextError { .. } => {
                ErrorCategory::Schema
            }
        }
    }

    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn is_schema_error(&self) -> bool {
        self.category() == ErrorCategory::Schema
    }

    /// Process exit code for this failure. 1 is left for report output failures.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Schema => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input error: {}", self),
            ErrorCategory::Schema => format!("Schema error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DupesError::IoError { .. } => "Check that the input file exists and is readable",
            DupesError::ParseError { .. } => "Check the input file for JSON syntax errors",
            DupesError::NotAnArrayError { .. } | DupesError::NotAnObjectError { .. } => {
                "The input must look like [{\"name\": \"...\"}, ...]"
            }
            DupesError::InvalidConfigValueError { .. } => "Fix the configuration value and retry",
            DupesError::MissingFieldError { .. } | DupesError::NotTextError { .. } => {
                "Give every record a string 'name' field"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DupesError>;
