//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod movement;
pub mod pagination;
pub mod stats;
pub mod validation;

pub use movement::{Movement, NewMovement, DEFAULT_DESCRIPTION};
pub use pagination::{ListParams, PageInfo, Pagination};
pub use stats::MovementStats;
pub use validation::ValidationError;
