//! Incoming request head.

const MAX_HEADERS: usize = 64;

/// Method, path and headers of one HTTP/1.x request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub method: String,
    /// Request target without the query string.
    pub path: String,
    headers: Vec<(String, String)>,
}

/// Result of feeding a partially received buffer to [`Request::parse`].
#[derive(Debug)]
pub enum ParseStatus {
    /// A full head was parsed.
    Complete(Request),
    /// More bytes are needed.
    Partial,
}

impl Request {
    #[must_use]
    pub fn new(method: &str, target: &str) -> Self {
        let path = target.split_once('?').map_or(target, |(path, _)| path);
        Self {
            method: method.to_string(),
            path: path.to_string(),
            headers: Vec::new(),
        }
    }

    /// Adds a header, keeping any earlier headers of the same name.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Parses a request head from `buf`.
    ///
    /// # Errors
    ///
    /// Returns the `httparse` error if the bytes are not a valid request head.
    pub fn parse(buf: &[u8]) -> Result<ParseStatus, httparse::Error> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut req = httparse::Request::new(&mut headers);

        match req.parse(buf)? {
            httparse::Status::Complete(_) => {
                let mut request = Self::new(req.method.unwrap_or("GET"), req.path.unwrap_or("/"));
                for header in req.headers.iter() {
                    let value = String::from_utf8_lossy(header.value);
                    request.headers.push((header.name.to_string(), value.into_owned()));
                }
                Ok(ParseStatus::Complete(request))
            }
            httparse::Status::Partial => Ok(ParseStatus::Partial),
        }
    }

    /// All values of the headers called `name`, compared case-insensitively.
    pub fn header_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).next()
    }
}
