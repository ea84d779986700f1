use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("invalid line {line}: expected 3 comma-separated fields, found {found}")]
    FieldCountError { line: usize, found: usize },

    #[error("invalid quantity {value:?} on line {line}")]
    QuantityError { line: usize, value: String },

    #[error("file is not valid UTF-8 text")]
    EncodingError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl ListError {
    /// FormatError in the error taxonomy: the file was readable but its
    /// content does not match the `name,quantity,notes` line format.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ListError::FieldCountError { .. }
                | ListError::QuantityError { .. }
                | ListError::EncodingError
        )
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
