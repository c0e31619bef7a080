//! Error types for grid loading, validation and preimage counting

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum PreimageError {
    /// Grid has no rows or no columns
    EmptyImage,

    /// Rows of a grid differ in length
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Text grid contains something that is not a cell
    InvalidCell {
        /// 1-based line number in the source text
        line: usize,
        /// 1-based column (character or token position) within the line
        column: usize,
        /// The unrecognized text
        found: String,
    },

    /// Boundary rows would not fit the packed row representation
    ImageTooWide {
        /// Boundary row width the image requires
        width: usize,
        /// Widest supported boundary row
        max: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Transfer-matrix and exhaustive counts disagree
    VerificationFailed {
        /// Count from row propagation
        transfer: String,
        /// Count from exhaustive enumeration
        brute_force: String,
    },

    /// Failed to decode a PNG grid
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PreimageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImage => write!(f, "Image must have at least one row and one column"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the first row has {expected}"
                )
            }
            Self::InvalidCell {
                line,
                column,
                found,
            } => {
                write!(f, "Invalid cell '{found}' at line {line}, column {column}")
            }
            Self::ImageTooWide { width, max } => {
                write!(
                    f,
                    "Boundary rows of width {width} exceed the supported maximum of {max}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::VerificationFailed {
                transfer,
                brute_force,
            } => {
                write!(
                    f,
                    "Verification failed: row propagation counted {transfer}, exhaustive search counted {brute_force}"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PreimageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, PreimageError>;

impl From<image::ImageError> for PreimageError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PreimageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PreimageError {
    PreimageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PreimageError {
    PreimageError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
