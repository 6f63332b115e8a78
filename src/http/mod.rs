//! Prometheus scrape endpoint.
//!
//! Serves the cached snapshot on the configured metrics path through an
//! actix-web `HttpServer`. Every other path answers 404.
//!
//! # Responses
//!
//! - `GET <metrics_path>`: `200`, `text/plain;charset=utf-8`, exposition body
//! - upstream failure: `500`, body `An error occurred. <message>`
//! - anything else: `404`

/// Shared state handed to request handlers.
pub mod structs;

/// Constructors for the shared handler state.
pub mod impls;

/// Route table, server builder and handlers.
#[allow(clippy::module_inception)]
pub mod http;
