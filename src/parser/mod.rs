//! HTTP request parsing.
//!
//! This module turns the raw bytes of an incoming request into an
//! [`HttpRequest`], including the [`RequestTarget`] (path + query string)
//! that the router and resolvers consult.

mod request;
mod target;
mod method;
mod version;
mod error;

// Re-export public items
pub use request::HttpRequest;
pub use target::RequestTarget;
pub use method::Method;
pub use version::HttpVersion;
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;
