use thiserror::Error;

use crate::implementation::Implementation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiplyError {
    #[error("unsupported implementation selector {0}")]
    UnsupportedImplementation(u32),
    #[error("unknown implementation '{0}'")]
    UnknownImplementation(String),
    #[error("{0} implementation is not available in this build")]
    Unavailable(Implementation),
    #[error("device error: code {code}")]
    Device { code: i32 },
}

impl MultiplyError {
    /// Non-zero status code for callers that report failures numerically.
    pub fn status(&self) -> i32 {
        match self {
            MultiplyError::UnsupportedImplementation(_) | MultiplyError::UnknownImplementation(_) => 1,
            MultiplyError::Unavailable(_) => 2,
            MultiplyError::Device { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MultiplyError>;
