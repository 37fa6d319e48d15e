use crate::config::PadConfig;
use crate::direction::{Direction, Phase};
use crate::error::ConfigurationError;
use crate::geometry::clamp_to_disk;
use crate::observer::{ObserverId, Observers, PadEvent, PadObserver};
use crate::wedge::{Wedge, WedgeRegions};
use kurbo::{Circle, Point, Shape};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadState {
    pub center: Point,
    pub outer_radius: f64,
    pub knob_radius: f64,
    pub active_direction: Direction,
    pub knob_position: Point,
    pub phase: Phase,
}

impl PadState {
    pub fn drag_in_progress(&self) -> bool {
        self.phase == Phase::TrackingKnob
    }
}

/// Result of a touch landing on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchBegin {
    pub direction: Direction,
    pub knob_grab: bool,
}

/// A circular control split into wedges with a draggable knob in the middle.
pub struct DirectionalPad {
    config: PadConfig,
    wedges: Vec<Wedge>,
    regions: Vec<WedgeRegions>,
    state: PadState,
    observers: Observers,
}

impl DirectionalPad {
    pub fn new(config: PadConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut pad = Self {
            config,
            wedges: Vec::new(),
            regions: Vec::new(),
            state: PadState {
                center: Point::ZERO,
                outer_radius: config.outer_radius,
                knob_radius: config.knob_radius(),
                active_direction: Direction::None,
                knob_position: Point::ZERO,
                phase: Phase::Idle,
            },
            observers: Observers::default(),
        };
        pad.rebuild();
        Ok(pad)
    }

    /// Replaces the wedge set. A gesture in progress is cancelled first.
    pub fn configure(&mut self, config: PadConfig) -> Result<(), ConfigurationError> {
        config.validate()?;

        if self.state.phase != Phase::Idle {
            self.touch_cancel();
        }
        self.config = config;
        self.state.outer_radius = config.outer_radius;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        self.wedges = Wedge::chain(
            self.config.wedge_count,
            self.config.padding,
            self.config.start_offset,
            self.config.outer_radius,
            self.config.stroke_width,
        );
        self.layout(self.state.center);
    }

    pub fn layout(&mut self, center: Point) {
        self.state.center = center;
        self.state.knob_radius = self.config.knob_radius();
        self.regions = self.wedges.iter().map(|w| w.regions(center)).collect();
        if !self.state.drag_in_progress() {
            self.state.knob_position = center;
        }
    }

    pub fn subscribe(&mut self, observer: impl PadObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn touch_begin(&mut self, point: Point) -> TouchBegin {
        let knob = Circle::new(self.state.knob_position, self.state.knob_radius);
        let knob_grab = knob.contains(point);

        if knob_grab {
            self.state.phase = Phase::TrackingKnob;
        } else {
            self.state.phase = Phase::TrackingWedge;
            let direction = self.classify(|r| r.touch_contains(point));
            self.set_direction(direction);
        }
        log::trace!("touch began at {:?}, knob grab: {}", point, knob_grab);
        self.observers.emit(PadEvent::Press);

        TouchBegin {
            direction: self.state.active_direction,
            knob_grab,
        }
    }

    pub fn touch_move(&mut self, point: Point) {
        if !self.state.drag_in_progress() {
            return;
        }

        let knob = clamp_to_disk(self.state.center, point, self.config.drag_radius());
        self.state.knob_position = knob;

        let direction = self.classify(|r| r.drag_contains(knob));
        self.set_direction(direction);

        log::trace!("knob at {:?}, direction {}", knob, direction);
        self.observers.emit(PadEvent::ValueChanged { knob, direction });
    }

    pub fn touch_end(&mut self) {
        if self.state.drag_in_progress() {
            self.state.knob_position = self.state.center;
        }
        self.set_direction(Direction::None);
        self.state.phase = Phase::Idle;
        self.observers.emit(PadEvent::Release);
    }

    pub fn touch_cancel(&mut self) {
        self.touch_end();
    }

    /// First wedge in index order whose region holds the point.
    fn classify(&self, hit: impl Fn(&WedgeRegions) -> bool) -> Direction {
        self.regions.iter().position(hit).into()
    }

    fn set_direction(&mut self, direction: Direction) {
        let old = self.state.active_direction;
        if old == direction {
            return;
        }
        self.state.active_direction = direction;
        log::debug!("direction changed: {} -> {}", old, direction);
        self.observers.emit(PadEvent::DirectionChanged(direction));
    }

    pub fn state(&self) -> &PadState {
        &self.state
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn active_direction(&self) -> Direction {
        self.state.active_direction
    }

    pub fn knob_position(&self) -> Point {
        self.state.knob_position
    }

    pub fn knob_radius(&self) -> f64 {
        self.state.knob_radius
    }

    pub fn drag_radius(&self) -> f64 {
        self.config.drag_radius()
    }
}
