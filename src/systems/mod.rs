//! Systems run by the frame loop, leaves first.

pub mod noise_field;
pub mod pool;
pub mod flow;
pub mod trail;
pub mod glow;

pub use flow::{FlowSimulator, FrameCounters, RespawnCause, TrailSegment, Transition};
pub use glow::GlowCompositor;
pub use noise_field::NoiseField;
pub use pool::{ParticlePool, SpawnParams};
pub use trail::{fade_in_out, TrailRenderer};
