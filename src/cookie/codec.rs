//! Encode-and-set and get-and-decode.
//!
//! Values travel as padded URL-safe base64 so any byte sequence survives the
//! cookie grammar. Decoding is strict: wrong alphabet, missing or extra
//! padding, truncated input and non-zero trailing bits are all rejected.

use super::error::CookieError;
use super::jar::find_cookie;
use super::record::Cookie;
use crate::server::{Request, Response};
use base64::{Engine as _, engine::general_purpose::URL_SAFE};
use tracing::warn;

/// Largest serialized `name=value; attributes` line the writer will send.
pub const MAX_COOKIE_SIZE: usize = 4096;

#[must_use]
pub fn encode_value(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

/// Reverses [`encode_value`].
///
/// # Errors
///
/// Returns [`CookieError::InvalidValue`] if `encoded` is not canonical padded
/// URL-safe base64.
pub fn decode_value(encoded: &str) -> Result<Vec<u8>, CookieError> {
    URL_SAFE
        .decode(encoded)
        .map_err(|_| CookieError::InvalidValue)
}

/// Encodes the cookie's value and attaches it to `response` as a `Set-Cookie` header.
///
/// The response is left untouched on failure.
///
/// # Errors
///
/// Returns [`CookieError::ValueTooLong`] if the serialized cookie exceeds
/// [`MAX_COOKIE_SIZE`].
pub fn write(response: &mut Response, mut cookie: Cookie) -> Result<(), CookieError> {
    cookie.value = encode_value(cookie.value.as_bytes());
    attach(response, &cookie)
}

/// Like [`write`], but the value is an arbitrary byte sequence that replaces
/// whatever `cookie.value` holds.
///
/// # Errors
///
/// Returns [`CookieError::ValueTooLong`] if the serialized cookie exceeds
/// [`MAX_COOKIE_SIZE`].
pub fn write_bytes(
    response: &mut Response,
    mut cookie: Cookie,
    value: &[u8],
) -> Result<(), CookieError> {
    cookie.value = encode_value(value);
    attach(response, &cookie)
}

/// A cookie whose name is not a token is dropped without error.
fn attach(response: &mut Response, cookie: &Cookie) -> Result<(), CookieError> {
    if !cookie.has_valid_name() {
        warn!(cookie = %cookie.name.escape_debug(), "Invalid cookie name, cookie dropped");
        return Ok(());
    }

    let line = cookie.to_string();
    if line.len() > MAX_COOKIE_SIZE {
        return Err(CookieError::ValueTooLong { len: line.len() });
    }
    response.add_header("Set-Cookie", line);
    Ok(())
}

/// Looks up cookie `name` in `request` and returns its decoded bytes.
///
/// # Errors
///
/// Returns [`CookieError::NotFound`] if no such cookie was sent and
/// [`CookieError::InvalidValue`] if its value does not decode.
pub fn read_bytes(request: &Request, name: &str) -> Result<Vec<u8>, CookieError> {
    let raw = find_cookie(request.header_values("Cookie"), name).ok_or(CookieError::NotFound)?;
    decode_value(raw)
}

/// Looks up cookie `name` in `request` and returns its decoded text.
///
/// # Errors
///
/// Returns [`CookieError::NotFound`] if no such cookie was sent and
/// [`CookieError::InvalidValue`] if its value does not decode to UTF-8 text.
pub fn read(request: &Request, name: &str) -> Result<String, CookieError> {
    let bytes = read_bytes(request, name)?;
    String::from_utf8(bytes).map_err(|_| CookieError::InvalidValue)
}
