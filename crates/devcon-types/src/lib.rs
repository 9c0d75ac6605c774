//! Foundation types for the dev console.
//!
//! This crate contains the types shared by all dev-console crates: the
//! error enum and the monotonic clock abstraction used by the suggestion
//! debounce logic.

pub mod clock;
pub mod error;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{DevconError, Result};
