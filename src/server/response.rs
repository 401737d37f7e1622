//! HTTP response utilities.
//!
//! An in-memory response that handlers fill in and the listener serializes.

use std::fmt::Write;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Status line, headers and body of one response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

impl Response {
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Replaces the status and body with a plain-text error message.
    ///
    /// The body is `message` plus a trailing newline and the response is
    /// marked `nosniff`. Headers already set, such as cookies, are kept.
    pub fn error(&mut self, status: u16, message: &str) {
        self.status = status;
        self.set_header("Content-Type", TEXT_PLAIN);
        self.set_header("X-Content-Type-Options", "nosniff");
        self.body = format!("{message}\n").into_bytes();
    }

    /// Sets a plain-text body.
    pub fn text(&mut self, body: impl Into<String>) {
        self.set_header("Content-Type", TEXT_PLAIN);
        self.body = body.into().into_bytes();
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Appends a header, keeping any earlier headers of the same name.
    pub fn add_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.push((name.to_string(), value.into()));
    }

    /// Replaces every header called `name` with a single value.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.add_header(name, value);
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).next()
    }

    pub fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Serializes the response for the wire as HTTP/1.1 with `Connection: close`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = String::new();
        let _ = write!(head, "HTTP/1.1 {} {}\r\n", self.status, reason(self.status));

        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case("content-length") || name.eq_ignore_ascii_case("connection")
            {
                continue;
            }
            let _ = write!(head, "{name}: {value}\r\n");
        }

        let _ = write!(head, "Content-Length: {}\r\n", self.body.len());
        head.push_str("Connection: close\r\n\r\n");

        let mut out = head.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        431 => "Request Header Fields Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
