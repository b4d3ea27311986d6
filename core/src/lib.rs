//! Typed client for the RuneScape Bestiary JSON API.
//!
//! # Overview
//! Ten read-only endpoints, each a thin wrapper over the same pipeline:
//! build a GET URL, perform one round-trip, coarse-check the body shape,
//! decode JSON into a typed record. No retries, no caching, no sessions;
//! every call is an independent stateless exchange.
//!
//! # Design
//! - [`BestiaryClient`] builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network, so all URL and
//!   decode logic is testable deterministically.
//! - [`Transport`] executes requests with ureq and is the single chokepoint
//!   for connection behavior (timeouts live there, uniformly).
//! - [`Bestiary`] composes the two into one namespace of blocking calls —
//!   the surface most callers want.
//! - Parameter validation happens in `build_*`, before any I/O: a bad
//!   argument produces an error and zero network requests.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::Bestiary;
pub use client::{BestiaryClient, BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{Monster, MonsterLookup, SlayerCategories, Weaknesses};
