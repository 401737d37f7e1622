//! HTTP hosting glue.
//!
//! A tokio accept loop that parses one request head per connection with
//! `httparse`, routes it, and writes a `Connection: close` response.

pub mod listener;
pub mod request;
pub mod response;
pub mod router;

pub use listener::{bind, serve};
pub use request::Request;
pub use response::Response;
pub use router::{EXAMPLE_COOKIE_NAME, demo_cookie, handle};
