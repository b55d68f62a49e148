//! PageSize value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of records per page when listing the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Page size used when nothing is configured.
    pub const DEFAULT: PageSize = PageSize(5);

    /// Create a new PageSize.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPageSize` for zero.
    pub fn new(size: usize) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::InvalidPageSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
