//! Repository implementations for database access
//!
//! Repositories borrow a connection owned by the caller, so the
//! caller decides when it is released.

pub mod movements;

pub use movements::MovementRepo;
