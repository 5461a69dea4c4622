//! lw-core: stable foundation for lipwalk.
//!
//! Contains:
//! - units (uom SI types + constructors, standard gravity)
//! - numeric (Real + float guards)
//! - vector (horizontal-plane vector type)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;
pub mod vector;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
pub use vector::*;
