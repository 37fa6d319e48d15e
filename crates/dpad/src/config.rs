use crate::error::ConfigurationError;
use crate::geometry::Degrees;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTER_RADIUS: f64 = 100.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 50.0;
pub const DEFAULT_PADDING: f64 = 2.0;
pub const DEFAULT_WEDGE_COUNT: usize = 4;
pub const DEFAULT_START_OFFSET: f64 = 45.0;
pub const DEFAULT_KNOB_SCALE: f64 = 1.8;

/// Shape of a pad. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PadConfig {
    pub outer_radius: f64,
    pub stroke_width: f64,
    pub padding: Degrees,
    pub wedge_count: usize,
    pub start_offset: Degrees,
    /// The knob radius is the inner edge of the ring divided by this.
    pub knob_scale: f64,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            padding: Degrees::new(DEFAULT_PADDING),
            wedge_count: DEFAULT_WEDGE_COUNT,
            start_offset: Degrees::new(DEFAULT_START_OFFSET),
            knob_scale: DEFAULT_KNOB_SCALE,
        }
    }
}

impl PadConfig {
    pub fn span(&self) -> Degrees {
        Degrees::new(360.0 / self.wedge_count as f64)
    }

    /// Radius of the ring's inner edge.
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius - self.stroke_width / 2.0
    }

    pub fn knob_radius(&self) -> f64 {
        self.inner_radius() / self.knob_scale
    }

    /// How far the knob center may travel from the pad center.
    pub fn drag_radius(&self) -> f64 {
        self.inner_radius() - self.knob_radius()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.wedge_count < 1 {
            return Err(ConfigurationError::WedgeCount(self.wedge_count));
        }

        [
            ("outer_radius", self.outer_radius),
            ("stroke_width", self.stroke_width),
            ("padding", *self.padding),
            ("start_offset", *self.start_offset),
            ("knob_scale", self.knob_scale),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map_or(Ok(()), |(name, value)| {
            Err(ConfigurationError::NotFinite { name, value })
        })?;

        if self.stroke_width < 0.0 {
            return Err(ConfigurationError::StrokeWidth(self.stroke_width));
        }
        if self.inner_radius() <= 0.0 {
            return Err(ConfigurationError::KnobRadius {
                outer_radius: self.outer_radius,
                stroke_width: self.stroke_width,
            });
        }
        let span = *self.span();
        if *self.padding < 0.0 || *self.padding >= span {
            return Err(ConfigurationError::Padding {
                padding: *self.padding,
                span,
            });
        }
        if self.knob_scale < 1.0 {
            return Err(ConfigurationError::KnobScale(self.knob_scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PadConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!((config.knob_radius() - 75.0 / 1.8).abs() < 1e-9);
        assert!((config.drag_radius() - (75.0 - 75.0 / 1.8)).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_zero_wedges() {
        let config = PadConfig {
            wedge_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::WedgeCount(0)));
    }

    #[test]
    fn test_rejects_degenerate_knob() {
        for outer_radius in [25.0, 10.0] {
            let config = PadConfig {
                outer_radius,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigurationError::KnobRadius { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_bad_padding() {
        for padding in [-1.0, 90.0, 120.0] {
            let config = PadConfig {
                padding: Degrees::new(padding),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigurationError::Padding { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_nan_and_small_scale() {
        let config = PadConfig {
            outer_radius: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NotFinite {
                name: "outer_radius",
                ..
            })
        ));

        let config = PadConfig {
            knob_scale: 0.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::KnobScale(0.5)));
    }

    #[test]
    fn test_partial_deserialization() {
        let config: PadConfig =
            serde_json::from_str(r#"{ "wedge_count": 8, "padding": 1.5 }"#).unwrap();
        assert_eq!(config.wedge_count, 8);
        assert_eq!(config.padding, Degrees::new(1.5));
        assert_eq!(config.outer_radius, DEFAULT_OUTER_RADIUS);
    }
}
