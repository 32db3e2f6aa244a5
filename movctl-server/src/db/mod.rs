//! Database layer - connection provider and repositories
//!
//! # Design Principles
//!
//! - One fresh connection per request, never pooled or shared
//! - Every acquired connection is released on all exit paths
//! - Parameterized SQL only
//! - Transactions for writes

pub mod connection;
pub mod error;
pub mod repos;
pub mod schema;

pub use connection::{ConnectionProvider, ScopedConnection};
pub use error::DbError;
pub use repos::*;
