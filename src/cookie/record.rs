//! Cookie record and `Set-Cookie` serialization.

use super::jar::is_cookie_value_byte;
use std::fmt::{self, Write};
use std::net::Ipv4Addr;

/// Cross-site transmission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// One HTTP cookie as it is sent in a `Set-Cookie` header.
///
/// Empty `path` and `domain` are left out of the serialized form, as is a
/// `max_age` of zero. A negative `max_age` serializes as `Max-Age=0`, which
/// tells the client to delete the cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
    pub max_age: i64,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: Option<SameSite>,
}

impl Cookie {
    /// Creates a cookie with the given name and value and no attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Whether `name` is an HTTP token. Cookies with any other name serialize
    /// to an empty string and are never sent.
    #[must_use]
    pub fn has_valid_name(&self) -> bool {
        !self.name.is_empty() && self.name.bytes().all(is_token_byte)
    }
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// Printable ASCII except `;`.
fn is_path_byte(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control() && c != ';'
}

/// Host name made of letter/digit/`-`/`_` labels with at least one letter,
/// or an IPv4 address. One leading `.` is allowed.
fn is_valid_domain(domain: &str) -> bool {
    let host = domain.strip_prefix('.').unwrap_or(domain);
    if host.is_empty() || host.len() > 255 {
        return false;
    }
    if host.parse::<Ipv4Addr>().is_ok() {
        return true;
    }

    let mut saw_letter = false;
    for label in host.split('.') {
        if label.is_empty()
            || label.len() > 63
            || label.starts_with('-')
            || label.ends_with('-')
        {
            return false;
        }
        for b in label.bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => saw_letter = true,
                b'0'..=b'9' | b'-' => {}
                _ => return false,
            }
        }
    }
    saw_letter
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_valid_name() {
            return Ok(());
        }

        // Bytes a client may not echo back are dropped; space and comma force quoting.
        let value: String = self
            .value
            .chars()
            .filter(|&c| c.is_ascii() && is_cookie_value_byte(c as u8))
            .collect();
        if value.contains([' ', ',']) {
            write!(f, "{}=\"{value}\"", self.name)?;
        } else {
            write!(f, "{}={value}", self.name)?;
        }

        if !self.path.is_empty() {
            f.write_str("; Path=")?;
            for c in self.path.chars().filter(|&c| is_path_byte(c)) {
                f.write_char(c)?;
            }
        }

        if is_valid_domain(&self.domain) {
            let domain = self.domain.strip_prefix('.').unwrap_or(&self.domain);
            write!(f, "; Domain={domain}")?;
        }

        if self.max_age > 0 {
            write!(f, "; Max-Age={}", self.max_age)?;
        } else if self.max_age < 0 {
            f.write_str("; Max-Age=0")?;
        }

        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; SameSite={}", same_site.as_str())?;
        }

        Ok(())
    }
}
