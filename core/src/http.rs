//! HTTP request and response values as plain data.
//!
//! # Design
//! The bestiary API is read-only: every request is a GET with no headers and
//! no body, so a request reduces to its URL. `BestiaryClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; `Transport` (or any caller-supplied executor) performs the actual
//! round-trip in between. Owned fields keep the values free of lifetimes.

/// A single GET request, described as plain data.
///
/// Built by `BestiaryClient::build_*` methods and executed by `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Fully-formed absolute URL, query string included.
    pub url: String,
}

/// The outcome of executing an `HttpRequest`.
///
/// The status code is recorded for diagnostics, but success is decided by the
/// body shape in `BestiaryClient::parse_*`: the live service has been known
/// to answer errors with status 200 and a non-JSON body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
