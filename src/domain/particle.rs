//! Particle record layout inside the packed pool buffer.
//!
//! One record is `PARTICLE_STRIDE` consecutive `f32`s. The offsets below are
//! the only place the layout is spelled out; everything else goes through
//! [`ParticleRecord::read`] / [`ParticleRecord::write`].

/// Number of `f32` slots per particle.
pub const PARTICLE_STRIDE: usize = 9;

pub const OFFSET_X: usize = 0;
pub const OFFSET_Y: usize = 1;
pub const OFFSET_VX: usize = 2;
pub const OFFSET_VY: usize = 3;
pub const OFFSET_LIFE: usize = 4;
pub const OFFSET_TTL: usize = 5;
pub const OFFSET_SPEED: usize = 6;
pub const OFFSET_RADIUS: usize = 7;
pub const OFFSET_HUE: usize = 8;

/// Typed view of one record. `life` and `ttl` are whole frame counts; they
/// are stored as `f32` in the buffer, exact well past any reachable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleRecord {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub ttl: u32,
    pub speed: f32,
    pub radius: f32,
    pub hue: f32,
}

impl ParticleRecord {
    /// Decode a record from its `PARTICLE_STRIDE`-long slice.
    #[inline]
    pub fn read(slot: &[f32]) -> Self {
        Self {
            x: *fast!(slot, [OFFSET_X]),
            y: *fast!(slot, [OFFSET_Y]),
            vx: *fast!(slot, [OFFSET_VX]),
            vy: *fast!(slot, [OFFSET_VY]),
            life: *fast!(slot, [OFFSET_LIFE]) as u32,
            ttl: *fast!(slot, [OFFSET_TTL]) as u32,
            speed: *fast!(slot, [OFFSET_SPEED]),
            radius: *fast!(slot, [OFFSET_RADIUS]),
            hue: *fast!(slot, [OFFSET_HUE]),
        }
    }

    /// Encode every field at once; a record is never partially written.
    #[inline]
    pub fn write(&self, slot: &mut [f32]) {
        fast!(slot, [OFFSET_X] = self.x);
        fast!(slot, [OFFSET_Y] = self.y);
        fast!(slot, [OFFSET_VX] = self.vx);
        fast!(slot, [OFFSET_VY] = self.vy);
        fast!(slot, [OFFSET_LIFE] = self.life as f32);
        fast!(slot, [OFFSET_TTL] = self.ttl as f32);
        fast!(slot, [OFFSET_SPEED] = self.speed);
        fast!(slot, [OFFSET_RADIUS] = self.radius);
        fast!(slot, [OFFSET_HUE] = self.hue);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life > self.ttl
    }
}
