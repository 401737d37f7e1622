//! Library definitions.
//!
//! Exports the cookie writer and reader, configuration, and the HTTP server
//! that exposes them on `/set` and `/get`.

pub mod config;
pub mod cookie;
pub mod server;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
pub use config::{Config, Result, ServerError};
pub use cookie::{Cookie, CookieError, MAX_COOKIE_SIZE, SameSite, read, write};
pub use server::{Request, Response};
