use serde::{Deserialize, Serialize};

use crate::core::{VortexError, VortexResult};
use crate::domain::color::Rgba;

/// Fixed constants of the effect. Not exposed as options.
pub mod tunables {
    /// Frames every particle lives at minimum.
    pub const BASE_TTL: f32 = 50.0;
    /// Extra random frames-to-live, `uniform(0, RANGE_TTL)`.
    pub const RANGE_TTL: f32 = 150.0;
    /// Hue spread added on top of `baseHue`.
    pub const RANGE_HUE: f32 = 100.0;

    pub const NOISE_X_OFF: f64 = 0.00125;
    pub const NOISE_Y_OFF: f64 = 0.00125;
    pub const NOISE_Z_OFF: f64 = 0.0005;
    /// Turns of the flow angle per unit of noise.
    pub const NOISE_STEPS: f64 = 3.0;

    /// Weight of the flow direction when blending velocity.
    pub const VELOCITY_SMOOTHING: f32 = 0.5;

    pub const TRAIL_SATURATION_PCT: f32 = 100.0;
    pub const TRAIL_LIGHTNESS_PCT: f32 = 60.0;

    pub const GLOW_WIDE_BLUR_PX: f32 = 8.0;
    pub const GLOW_TIGHT_BLUR_PX: f32 = 4.0;
    pub const GLOW_BRIGHTNESS_PCT: f32 = 200.0;

    /// Upper bound on `particleCount` (buffer stays well inside wasm memory).
    pub const MAX_PARTICLE_COUNT: i64 = 1_000_000;
}

/// Caller-facing configuration; JSON keys are camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct VortexOptions {
    pub particle_count: i64,
    pub range_y: f32,
    pub base_hue: f32,
    pub base_speed: f32,
    pub range_speed: f32,
    pub base_radius: f32,
    pub range_radius: f32,
    pub background_color: String,
    /// Seeds both the noise field and the spawn RNG; clock-derived if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for VortexOptions {
    fn default() -> Self {
        Self {
            particle_count: 700,
            range_y: 400.0,
            base_hue: 220.0,
            base_speed: 0.0,
            range_speed: 1.5,
            base_radius: 1.0,
            range_radius: 2.0,
            background_color: "#000000".to_string(),
            seed: None,
        }
    }
}

impl VortexOptions {
    /// Parse options from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> VortexResult<Self> {
        let options: VortexOptions = serde_json::from_str(json)?;
        Ok(options)
    }

    pub fn to_json(&self) -> String {
        // A struct of numbers and strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn with_particle_count(mut self, count: i64) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject anything that would make construction meaningless.
    pub fn validate(&self) -> VortexResult<()> {
        if self.particle_count <= 0 {
            return Err(VortexError::InvalidParticleCount(self.particle_count));
        }
        if self.particle_count > tunables::MAX_PARTICLE_COUNT {
            return Err(VortexError::InvalidOption {
                name: "particleCount",
                value: self.particle_count as f64,
            });
        }

        check_finite("baseHue", self.base_hue)?;
        check_non_negative("rangeY", self.range_y)?;
        check_non_negative("baseSpeed", self.base_speed)?;
        check_non_negative("rangeSpeed", self.range_speed)?;
        check_non_negative("baseRadius", self.base_radius)?;
        check_non_negative("rangeRadius", self.range_radius)?;

        Rgba::parse_hex(&self.background_color)?;
        Ok(())
    }

    /// Validated pool capacity.
    pub fn capacity(&self) -> VortexResult<usize> {
        self.validate()?;
        Ok(self.particle_count as usize)
    }
}

fn check_finite(name: &'static str, value: f32) -> VortexResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(VortexError::InvalidOption { name, value: value as f64 })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> VortexResult<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(VortexError::InvalidOption { name, value: value as f64 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_component_props() {
        let o = VortexOptions::default();
        assert_eq!(o.particle_count, 700);
        assert_eq!(o.range_y, 400.0);
        assert_eq!(o.base_hue, 220.0);
        assert_eq!(o.base_speed, 0.0);
        assert_eq!(o.range_speed, 1.5);
        assert_eq!(o.base_radius, 1.0);
        assert_eq!(o.range_radius, 2.0);
        assert_eq!(o.background_color, "#000000");
        assert!(o.validate().is_ok());
    }

    #[test]
    fn json_fills_missing_keys_with_defaults() {
        let o = VortexOptions::from_json(r#"{"particleCount": 12, "baseHue": 120}"#).unwrap();
        assert_eq!(o.particle_count, 12);
        assert_eq!(o.base_hue, 120.0);
        assert_eq!(o.range_y, 400.0);
        assert_eq!(o.seed, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = VortexOptions::from_json(r#"{"particleCnt": 12}"#).unwrap_err();
        assert!(matches!(err, VortexError::OptionsParse(_)));
    }

    #[test]
    fn zero_and_negative_counts_are_rejected() {
        for count in [0, -5] {
            let err = VortexOptions::default().with_particle_count(count).validate().unwrap_err();
            assert!(matches!(err, VortexError::InvalidParticleCount(c) if c == count));
        }
    }

    #[test]
    fn negative_ranges_are_rejected() {
        let mut o = VortexOptions::default();
        o.range_speed = -1.0;
        assert!(matches!(
            o.validate(),
            Err(VortexError::InvalidOption { name: "rangeSpeed", .. })
        ));
    }

    #[test]
    fn non_finite_hue_is_rejected() {
        let mut o = VortexOptions::default();
        o.base_hue = f32::NAN;
        assert!(o.validate().is_err());
    }

    #[test]
    fn bad_background_color_is_rejected() {
        let mut o = VortexOptions::default();
        o.background_color = "blackish".into();
        assert!(matches!(o.validate(), Err(VortexError::InvalidColor(_))));
    }

    #[test]
    fn json_export_skips_missing_seed() {
        let json = VortexOptions::default().to_json();
        assert!(json.contains("\"particleCount\":700"));
        assert!(!json.contains("seed"));
        let seeded = VortexOptions::default().with_seed(3).to_json();
        assert!(seeded.contains("\"seed\":3"));
    }
}
