//! LED Core - Platform-agnostic Driver Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur das PeripheralService-Trait und den LED-Handle.

#![no_std]

pub mod led;
pub mod traits;

// Re-exports für einfachen Zugriff
pub use led::Led;
pub use traits::{LedError, PeripheralService};
