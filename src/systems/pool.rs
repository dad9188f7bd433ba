//! ParticlePool - every particle packed into one `Vec<f32>`
//!
//! Record `i` lives at `[i * PARTICLE_STRIDE, (i + 1) * PARTICLE_STRIDE)`.
//! Capacity is fixed for the life of the pool; callers that want a different
//! count build a new one.

use crate::core::random::Rng;
use crate::core::{VortexError, VortexResult};
use crate::domain::options::tunables::{BASE_TTL, RANGE_HUE, RANGE_TTL};
use crate::domain::options::VortexOptions;
use crate::domain::particle::{ParticleRecord, PARTICLE_STRIDE};
use crate::domain::viewport::Viewport;

/// Spawn distribution for a fresh record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnParams {
    pub range_y: f32,
    pub base_ttl: f32,
    pub range_ttl: f32,
    pub base_speed: f32,
    pub range_speed: f32,
    pub base_radius: f32,
    pub range_radius: f32,
    pub base_hue: f32,
    pub range_hue: f32,
}

impl SpawnParams {
    pub fn from_options(options: &VortexOptions) -> Self {
        Self {
            range_y: options.range_y,
            base_ttl: BASE_TTL,
            range_ttl: RANGE_TTL,
            base_speed: options.base_speed,
            range_speed: options.range_speed,
            base_radius: options.base_radius,
            range_radius: options.range_radius,
            base_hue: options.base_hue,
            range_hue: RANGE_HUE,
        }
    }

    /// Draw a brand new record. Every field comes from this call; nothing
    /// is inherited from whatever occupied the slot before.
    pub fn spawn(&self, rng: &mut Rng, viewport: &Viewport) -> ParticleRecord {
        let x = rng.rand(viewport.width);
        let y = viewport.center_y + rng.rand_range(self.range_y);
        let ttl = (self.base_ttl + rng.rand(self.range_ttl)) as u32;
        let speed = self.base_speed + rng.rand(self.range_speed);
        let radius = self.base_radius + rng.rand(self.range_radius);
        let hue = self.base_hue + rng.rand(self.range_hue);

        ParticleRecord {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            life: 0,
            ttl,
            speed,
            radius,
            hue,
        }
    }
}

pub struct ParticlePool {
    buffer: Vec<f32>,
    capacity: usize,
}

impl ParticlePool {
    /// Zero-filled pool; call [`ParticlePool::spawn_all`] before use.
    pub fn new(capacity: usize) -> VortexResult<Self> {
        if capacity == 0 {
            return Err(VortexError::InvalidParticleCount(0));
        }
        Ok(Self {
            buffer: vec![0.0; capacity * PARTICLE_STRIDE],
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw packed buffer (read-only view for renderers and JS).
    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn byte_len(&self) -> usize {
        self.buffer.len() * std::mem::size_of::<f32>()
    }

    #[inline]
    fn slot(&self, index: usize) -> &[f32] {
        let start = index * PARTICLE_STRIDE;
        &self.buffer[start..start + PARTICLE_STRIDE]
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> &mut [f32] {
        let start = index * PARTICLE_STRIDE;
        &mut self.buffer[start..start + PARTICLE_STRIDE]
    }

    #[inline]
    pub fn record(&self, index: usize) -> ParticleRecord {
        ParticleRecord::read(self.slot(index))
    }

    /// Overwrite slot `index` with all nine fields of `record`.
    #[inline]
    pub fn write(&mut self, index: usize, record: &ParticleRecord) {
        record.write(self.slot_mut(index));
    }

    pub fn records(&self) -> impl Iterator<Item = ParticleRecord> + '_ {
        self.buffer.chunks_exact(PARTICLE_STRIDE).map(ParticleRecord::read)
    }

    /// Respawn one slot.
    pub fn spawn(
        &mut self,
        index: usize,
        rng: &mut Rng,
        params: &SpawnParams,
        viewport: &Viewport,
    ) -> ParticleRecord {
        let record = params.spawn(rng, viewport);
        self.write(index, &record);
        record
    }

    /// Respawn every slot in index order.
    pub fn spawn_all(&mut self, rng: &mut Rng, params: &SpawnParams, viewport: &Viewport) {
        for index in 0..self.capacity {
            self.spawn(index, rng, params, viewport);
        }
    }

    /// Drop the buffer. Capacity reads as zero afterwards.
    pub fn release(&mut self) {
        self.buffer = Vec::new();
        self.capacity = 0;
    }

    pub fn is_released(&self) -> bool {
        self.buffer.is_empty()
    }
}
