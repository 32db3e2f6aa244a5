//! movctl-server: HTTP API for movement events
//!
//! Records sensor detections ("movimientos") in MySQL and exposes
//! them over a small JSON API, plus a statistics rollup.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DbConfig, ErrorDetail};
pub use db::{ConnectionProvider, DbError, ScopedConnection};
pub use http::{build_router, run_server, ServerConfig};
