//! Cookie error kinds.

use thiserror::Error;

/// Failures of the cookie writer and reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CookieError {
    /// The serialized cookie is larger than [`MAX_COOKIE_SIZE`](super::MAX_COOKIE_SIZE).
    #[error("cookie value too long: {len} bytes serialized")]
    ValueTooLong { len: usize },

    /// The stored value is not valid padded URL-safe base64.
    #[error("invalid cookie value")]
    InvalidValue,

    /// The request carries no cookie with the requested name.
    #[error("named cookie not present")]
    NotFound,
}
