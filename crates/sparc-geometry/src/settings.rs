//! Kernel-relevant curve settings. Changing any of them invalidates a
//! cached snapshot.

use serde::{Deserialize, Serialize};

use crate::ark::ArkParameters;
use crate::spline_type::Kernel;

/// Chord sub-segments sampled per segment when measuring arc length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct SampleResolution(usize);

impl SampleResolution {
    pub const MIN: usize = 64;
    pub const MAX: usize = 128;
    pub const DEFAULT: usize = 100;

    /// Create a resolution, clamped to `MIN..=MAX`.
    pub fn new(samples: usize) -> Self {
        Self(samples.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SampleResolution {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<usize> for SampleResolution {
    fn from(samples: usize) -> Self {
        Self::new(samples)
    }
}

impl From<SampleResolution> for usize {
    fn from(resolution: SampleResolution) -> Self {
        resolution.0
    }
}

/// Everything besides the control points that shapes a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineSettings {
    pub kernel: Kernel,
    /// Close the curve with a segment from the last point back to the first.
    /// Only honoured with three or more points.
    pub looped: bool,
    pub resolution: SampleResolution,
    pub ark: ArkParameters,
}

impl SplineSettings {
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    #[must_use]
    pub fn with_resolution(mut self, samples: usize) -> Self {
        self.resolution = SampleResolution::new(samples);
        self
    }

    #[must_use]
    pub fn with_ark(mut self, step_length: f64) -> Self {
        self.ark = ArkParameters::enabled(step_length);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_clamped() {
        assert_eq!(SampleResolution::new(8).get(), SampleResolution::MIN);
        assert_eq!(SampleResolution::new(1000).get(), SampleResolution::MAX);
        assert_eq!(SampleResolution::new(96).get(), 96);
        assert_eq!(SampleResolution::default().get(), 100);
    }

    #[test]
    fn test_settings_builder() {
        let settings = SplineSettings::new(Kernel::CatmullRom)
            .looped(true)
            .with_resolution(64)
            .with_ark(0.5);
        assert_eq!(settings.kernel, Kernel::CatmullRom);
        assert!(settings.looped);
        assert_eq!(settings.resolution.get(), 64);
        assert!(settings.ark.enabled);
        assert_eq!(settings.ark.step_length, 0.5);
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = SplineSettings::new(Kernel::Bezier).with_ark(2.0);
        let json = serde_json::to_string(&settings).unwrap();
        let back: SplineSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let settings: SplineSettings =
            serde_json::from_str(r#"{ "kernel": "CubicLinear", "resolution": 10 }"#).unwrap();
        assert_eq!(settings.kernel, Kernel::CubicLinear);
        assert!(!settings.looped);
        assert_eq!(settings.resolution.get(), SampleResolution::MIN);
        assert!(!settings.ark.enabled);
    }
}
