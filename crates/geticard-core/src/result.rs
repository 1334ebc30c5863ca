//! Convenience result type alias for GetiCard.

use crate::error::AppError;

/// A specialized `Result` type for GetiCard operations.
pub type AppResult<T> = Result<T, AppError>;
