// Macro modules first so the rest of the crate can use them.
#[macro_use]
pub mod safety;
#[macro_use]
pub mod log;
