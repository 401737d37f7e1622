//! Request routing.
//!
//! `/set` writes the demonstration cookie, `/get` reads it back, and every
//! other path is a 404.

use crate::cookie::{self, Cookie, CookieError, SameSite};
use crate::server::{Request, Response};
use tracing::{debug, error};

pub const EXAMPLE_COOKIE_NAME: &str = "exampleCookie";

/// The cookie `/set` sends: a non-ASCII value with the usual hardening flags.
#[must_use]
pub fn demo_cookie() -> Cookie {
    Cookie {
        name: EXAMPLE_COOKIE_NAME.to_string(),
        value: "Hello Zoë!!".to_string(),
        path: "/".to_string(),
        max_age: 3600,
        http_only: true,
        secure: true,
        same_site: Some(SameSite::Lax),
        ..Default::default()
    }
}

/// Routes a parsed request to its handler.
#[must_use]
pub fn handle(request: &Request) -> Response {
    debug!(method = %request.method, path = %request.path, "Routing request");

    match request.path.as_str() {
        "/set" => set_cookie(),
        "/get" => get_cookie(request),
        _ => {
            let mut response = Response::new(404);
            response.error(404, "404 page not found");
            response
        }
    }
}

fn set_cookie() -> Response {
    let mut response = Response::new(200);

    if let Err(e) = cookie::write(&mut response, demo_cookie()) {
        error!(error = %e, cookie = EXAMPLE_COOKIE_NAME, "Failed to write cookie");
        response.error(500, "server error");
        return response;
    }

    response.text("cookie set!");
    response
}

fn get_cookie(request: &Request) -> Response {
    let mut response = Response::new(200);

    match cookie::read(request, EXAMPLE_COOKIE_NAME) {
        Ok(value) => response.text(value),
        Err(CookieError::NotFound) => response.error(400, "cookie not found"),
        Err(e) => {
            error!(error = %e, cookie = EXAMPLE_COOKIE_NAME, "Failed to read cookie");
            response.error(500, "server error");
        }
    }

    response
}
