//! Core functionality shared by every system: safety and logging macros,
//! the seeded RNG, the clock and the crate error type.

#[macro_use]
pub mod utils;
pub mod clock;
pub mod error;
pub mod random;

pub use error::{VortexError, VortexResult};
