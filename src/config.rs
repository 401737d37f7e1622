//! Configuration management.
//!
//! Loads configuration from environment variables using dotenvy.
//! Every setting has a default, so an empty environment starts the server on port 5000.

mod error;
mod settings;

pub use error::{Result, ServerError};
pub use settings::Config;
