//! Hit testing and knob tracking for a circular, wedge-divided touch pad.
//!
//! The pad owns no rendering. Hosts feed it layout and touch points in local
//! coordinates and react to the [`PadEvent`]s it emits.

pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod observer;
pub mod pad;
pub mod wedge;

pub use config::PadConfig;
pub use direction::{Direction, Phase};
pub use error::ConfigurationError;
pub use geometry::{Degrees, Region, clamp_to_disk, distance, point_in_region};
pub use kurbo::Point;
pub use observer::{FnObserver, ObserverId, PadEvent, PadObserver};
pub use pad::{DirectionalPad, PadState, TouchBegin};
pub use wedge::{Wedge, WedgeRegions};
