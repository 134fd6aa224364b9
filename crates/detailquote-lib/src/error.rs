use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the DetailQuote library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Errors are only produced while loading and validating a price book.
/// Quote resolution itself never fails: an unresolvable selection prices
/// at zero (see `pricing::package_price`).
#[derive(Debug, Error)]
pub enum Error {
    /// Price book could not be located at the resolved path.
    #[error("price book not found at {path}")]
    PriceBookNotFound { path: PathBuf },

    /// Raised when price book data fails validation.
    #[error("invalid price book: {message}")]
    PriceBookValidation { message: String },

    /// Raised when duplicate add-on ids are encountered during load.
    #[error("duplicate add-on id encountered: {id}")]
    DuplicateAddOnId { id: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
