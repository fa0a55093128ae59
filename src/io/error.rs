//! Error types for generation and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and export operations
#[derive(Debug)]
pub enum MazeError {
    /// Maze dimensions must both be odd
    ///
    /// Detected before any grid mutation; the caller's grid is untouched.
    InvalidDimensions {
        /// Requested region width
        width: usize,
        /// Requested region height
        height: usize,
    },

    /// A placement probability fell outside `[0, 1]`
    ChanceOutOfRange {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: f64,
    },

    /// The generation region does not fit inside the caller's grid
    RegionOutOfBounds {
        /// Rows and columns the region requires
        required: (usize, usize),
        /// Rows and columns the grid provides
        available: (usize, usize),
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Cannot generate a maze with even dimensions ({width}x{height}); both must be odd"
                )
            }
            Self::ChanceOutOfRange { parameter, value } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' = {value}: must be within [0, 1]"
                )
            }
            Self::RegionOutOfBounds {
                required,
                available,
            } => {
                write!(
                    f,
                    "Generation region requires a {}x{} grid but only {}x{} is available",
                    required.0, required.1, available.0, available.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}
