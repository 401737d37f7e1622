//! Request cookie lookup.
//!
//! Parses `Cookie` header lines of the form `a=1; b=2`.

/// Bytes a client may send inside a cookie value.
pub(super) fn is_cookie_value_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b'"' && b != b';' && b != b'\\'
}

/// Strips one pair of surrounding double quotes and rejects values with bytes
/// outside the cookie-octet range.
fn parse_cookie_value(raw: &str) -> Option<&str> {
    let value = if raw.len() > 1 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };

    value.bytes().all(is_cookie_value_byte).then_some(value)
}

/// Finds the first cookie called `name` across the given `Cookie` header lines.
///
/// Pairs whose value contains bytes a client may not send are skipped, so a
/// later well-formed pair with the same name can still match.
pub fn find_cookie<'a, I>(lines: I, name: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (key, raw) = part.split_once('=').unwrap_or((part, ""));
            (key == name).then_some(raw)
        })
        .find_map(parse_cookie_value)
}
