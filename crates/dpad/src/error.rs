use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("wedge count must be at least 1, got {0}")]
    WedgeCount(usize),
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("stroke width must not be negative, got {0}")]
    StrokeWidth(f64),
    #[error("outer radius {outer_radius} leaves no room for the knob with stroke width {stroke_width}")]
    KnobRadius { outer_radius: f64, stroke_width: f64 },
    #[error("padding {padding} must lie in [0, {span}) for {span} degree wedges")]
    Padding { padding: f64, span: f64 },
    #[error("knob scale must be at least 1, got {0}")]
    KnobScale(f64),
}
