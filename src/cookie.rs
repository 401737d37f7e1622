//! Cookie handling.
//!
//! The record type and its `Set-Cookie` serialization, request cookie lookup,
//! and the encode-and-set / get-and-decode pair built on padded URL-safe base64.

mod codec;
mod error;
mod jar;
mod record;

pub use codec::{MAX_COOKIE_SIZE, decode_value, encode_value, read, read_bytes, write, write_bytes};
pub use error::CookieError;
pub use jar::find_cookie;
pub use record::{Cookie, SameSite};
