//! Flow field sampled from 3-D Perlin noise.
//!
//! The third axis is the frame tick, so the pattern drifts over time
//! without jumps.

use std::f64::consts::TAU;

use noise::{NoiseFn, Perlin};

use crate::domain::options::tunables::{NOISE_STEPS, NOISE_X_OFF, NOISE_Y_OFF, NOISE_Z_OFF};

#[derive(Clone)]
pub struct NoiseField {
    noise: Perlin,
    seed: u32,
    x_off: f64,
    y_off: f64,
    z_off: f64,
    steps: f64,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            seed,
            x_off: NOISE_X_OFF,
            y_off: NOISE_Y_OFF,
            z_off: NOISE_Z_OFF,
            steps: NOISE_STEPS,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Raw noise in `[-1, 1]`.
    #[inline]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z]).clamp(-1.0, 1.0)
    }

    /// Flow angle (radians) at a surface position for the given tick.
    #[inline]
    pub fn flow_angle(&self, x: f32, y: f32, tick: u64) -> f64 {
        let n = self.sample(
            x as f64 * self.x_off,
            y as f64 * self.y_off,
            tick as f64 * self.z_off,
        );
        n * self.steps * TAU
    }

    /// Unit flow direction `(cos, sin)`.
    #[inline]
    pub fn direction(&self, x: f32, y: f32, tick: u64) -> (f32, f32) {
        let angle = self.flow_angle(x, y, tick);
        (angle.cos() as f32, angle.sin() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_unit_range() {
        let field = NoiseField::new(1234);
        for i in 0..2000 {
            let t = i as f64 * 0.37;
            let v = field.sample(t, t * 1.3 - 50.0, t * 0.1);
            assert!((-1.0..=1.0).contains(&v), "sample {v} out of range");
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = NoiseField::new(99);
        let b = NoiseField::new(99);
        for i in 0..100 {
            let p = i as f32 * 7.5;
            assert_eq!(a.flow_angle(p, p * 0.5, i).to_bits(), b.flow_angle(p, p * 0.5, i).to_bits());
        }
    }

    #[test]
    fn field_has_no_jumps_along_fine_scanlines() {
        let field = NoiseField::new(5);
        let step = 1e-3;
        for row in 0..16 {
            let y = row as f64 * 0.65;
            let mut prev = field.sample(0.0, y, 0.7);
            for i in 1..10_000 {
                let x = i as f64 * step;
                let v = field.sample(x, y, 0.7);
                assert!((v - prev).abs() < 0.01, "jump of {} at ({x}, {y})", (v - prev).abs());
                prev = v;
            }
        }
    }

    #[test]
    fn tiny_moves_give_tiny_angle_changes() {
        let field = NoiseField::new(5);
        for i in 0..500 {
            let x = 100.0 + i as f32 * 1.7;
            let y = 600.0 - i as f32 * 0.9;
            let a = field.flow_angle(x, y, 1400);
            let b = field.flow_angle(x + 0.001, y, 1400);
            assert!((a - b).abs() < 1e-3, "angle swing {} at ({x}, {y})", (a - b).abs());
        }
    }

    #[test]
    fn direction_is_unit_length() {
        let field = NoiseField::new(8);
        let (dx, dy) = field.direction(250.0, 125.0, 17);
        assert!(((dx * dx + dy * dy) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn adjacent_ticks_barely_move_the_angle() {
        let field = NoiseField::new(21);
        let a = field.flow_angle(300.0, 200.0, 40);
        let b = field.flow_angle(300.0, 200.0, 41);
        // zOff = 0.0005 per tick; slope of Perlin noise is bounded
        assert!((a - b).abs() < 0.5);
    }
}
