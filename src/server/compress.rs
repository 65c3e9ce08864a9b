//! Conditional gzip response compression.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::parser::HttpRequest;
use crate::server::error::Error;
use crate::server::response::HttpResponse;

/// Whether the client's `Accept-Encoding` lists gzip.
pub fn client_accepts_gzip(request: &HttpRequest) -> bool {
    request
        .get_header("Accept-Encoding")
        .is_some_and(|value| value.contains("gzip"))
}

/// Compress the response body when the client supports it.
///
/// Applied uniformly to every body the router produces: JSON listings, asset
/// bytes, log downloads, and static files. `Content-Length` is rewritten to
/// the transmitted size and `Content-Encoding: gzip` announced; clients
/// without gzip support get the body untouched.
pub fn negotiate(request: &HttpRequest, response: HttpResponse) -> Result<HttpResponse, Error> {
    if !client_accepts_gzip(request) {
        return Ok(response);
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&response.body)?;
    let compressed = encoder.finish()?;

    Ok(response
        .with_header("Content-Encoding", "gzip")
        .with_body_bytes(compressed))
}
