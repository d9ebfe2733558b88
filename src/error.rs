use std::fmt;

/// Error type for palette loading and map composition
#[derive(Debug)]
pub enum Error {
    /// A tile image failed to load, decode, or had unexpected dimensions
    AssetLoad {
        /// Path of the image that failed
        path: String,
        /// What went wrong, as reported by the loader
        reason: String,
    },
    /// The composite destination image could not be allocated at the
    /// requested size (scale drove a dimension to zero or past the
    /// image size limit)
    Allocation {
        /// Requested composite width in pixels
        width: u32,
        /// Requested composite height in pixels
        height: u32,
    },
    /// Map dimensions do not match the supplied tile sequence length
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AssetLoad { path, reason } => {
                write!(f, "Failed to load tile image '{}': {}", path, reason)
            }
            Error::Allocation { width, height } => {
                write!(f, "Cannot allocate a {}x{} composite image", width, height)
            }
            Error::Configuration(msg) => write!(f, "Invalid map configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
