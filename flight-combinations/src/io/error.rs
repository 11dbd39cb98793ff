//! Input and output error types.

/// Errors from reading flight records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// One or more required header names are absent
    #[error("required input headers missing: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    /// The header contains names that are not flight fields
    #[error("unknown headers are present: {}", .0.join(", "))]
    UnknownHeaders(Vec<String>),

    /// The header names a field more than once
    #[error("duplicated headers: {}", .0.join(", "))]
    DuplicateHeaders(Vec<String>),

    /// A headerless row has the wrong number of fields
    #[error("line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field value could not be parsed
    #[error("line {line}: invalid {field} {value:?}: {reason}")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The CSV stream itself is malformed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Returns true if the header row has the wrong shape.
    ///
    /// These are detected before any flight record is built.
    pub fn is_header_error(&self) -> bool {
        matches!(
            self,
            LoadError::MissingHeaders(_)
                | LoadError::UnknownHeaders(_)
                | LoadError::DuplicateHeaders(_)
        )
    }
}

/// Errors from writing itineraries.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
