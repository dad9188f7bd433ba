//! FlowSimulator - per-frame advection of every pooled particle
//!
//! Each particle goes through one explicit transition per frame:
//! `Alive -> (Alive | Respawn)`. [`advect`] is pure and returns the trail
//! segment to draw plus the transition; the simulator applies it to the pool.

use crate::core::random::Rng;
use crate::domain::options::tunables::VELOCITY_SMOOTHING;
use crate::domain::particle::ParticleRecord;
use crate::domain::viewport::Viewport;

use super::noise_field::NoiseField;
use super::pool::{ParticlePool, SpawnParams};

/// What the renderer needs to draw one particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub life: u32,
    pub ttl: u32,
    pub radius: f32,
    pub hue: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RespawnCause {
    /// `life > ttl` after the increment.
    Expired,
    /// New position left `[0, W] x [0, H]`.
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Record to store back into the slot.
    Alive(ParticleRecord),
    /// Slot must be respawned; `committed` is what the step produced and is
    /// discarded.
    Respawn {
        cause: RespawnCause,
        committed: ParticleRecord,
    },
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// One advection step for one particle.
///
/// `direction` is the flow direction sampled at the particle's pre-update
/// position. Out-of-bounds is checked before expiry; either one respawns.
pub fn advect(
    record: &ParticleRecord,
    direction: (f32, f32),
    viewport: &Viewport,
) -> (TrailSegment, Transition) {
    let vx = lerp(record.vx, direction.0, VELOCITY_SMOOTHING);
    let vy = lerp(record.vy, direction.1, VELOCITY_SMOOTHING);
    let x2 = record.x + vx * record.speed;
    let y2 = record.y + vy * record.speed;

    let segment = TrailSegment {
        x1: record.x,
        y1: record.y,
        x2,
        y2,
        life: record.life,
        ttl: record.ttl,
        radius: record.radius,
        hue: record.hue,
    };

    let committed = ParticleRecord {
        x: x2,
        y: y2,
        vx,
        vy,
        life: record.life.saturating_add(1),
        ..*record
    };

    let transition = if !viewport.contains(x2, y2) {
        Transition::Respawn {
            cause: RespawnCause::OutOfBounds,
            committed,
        }
    } else if committed.is_expired() {
        Transition::Respawn {
            cause: RespawnCause::Expired,
            committed,
        }
    } else {
        Transition::Alive(committed)
    };

    (segment, transition)
}

/// Per-frame tallies, fed into perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounters {
    pub advected: u32,
    pub expired: u32,
    pub out_of_bounds: u32,
}

impl FrameCounters {
    pub fn respawned(&self) -> u32 {
        self.expired + self.out_of_bounds
    }
}

pub struct FlowSimulator {
    field: NoiseField,
    tick: u64,
}

impl FlowSimulator {
    pub fn new(field: NoiseField) -> Self {
        Self { field, tick: 0 }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn reset_tick(&mut self) {
        self.tick = 0;
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Advance every particle one step, in slot order.
    ///
    /// The tick is bumped once before the first particle so the whole frame
    /// samples the same noise slice. `draw` receives each segment before the
    /// slot is committed or respawned.
    pub fn advance<F>(
        &mut self,
        pool: &mut ParticlePool,
        rng: &mut Rng,
        params: &SpawnParams,
        viewport: &Viewport,
        mut draw: F,
    ) -> FrameCounters
    where
        F: FnMut(&TrailSegment),
    {
        self.tick += 1;
        let mut counters = FrameCounters::default();

        for index in 0..pool.capacity() {
            let record = pool.record(index);
            let direction = self.field.direction(record.x, record.y, self.tick);
            let (segment, transition) = advect(&record, direction, viewport);

            draw(&segment);
            counters.advected += 1;

            match transition {
                Transition::Alive(next) => pool.write(index, &next),
                Transition::Respawn { cause, .. } => {
                    match cause {
                        RespawnCause::Expired => counters.expired += 1,
                        RespawnCause::OutOfBounds => counters.out_of_bounds += 1,
                    }
                    pool.spawn(index, rng, params, viewport);
                }
            }
        }

        counters
    }
}
