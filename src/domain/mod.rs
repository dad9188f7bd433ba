pub mod color;
pub mod options;
pub mod particle;
pub mod viewport;
