use derive_more::Display;
use strum::{Display as StrumDisplay, IntoStaticStr};

/// The wedge a gesture currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Direction {
    #[default]
    #[display("none")]
    None,
    #[display("wedge {_0}")]
    Wedge(usize),
}

impl Direction {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Wedge(i) => Some(*i),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Option<usize>> for Direction {
    fn from(idx: Option<usize>) -> Self {
        idx.map_or(Self::None, Self::Wedge)
    }
}

/// Where the pad is in a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    /// The touch started on the knob and drags it around.
    TrackingKnob,
    /// The touch started on a wedge ring, or anywhere off the knob.
    TrackingWedge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::None.to_string(), "none");
        assert_eq!(Direction::Wedge(2).to_string(), "wedge 2");
    }

    #[test]
    fn test_direction_from_index() {
        assert_eq!(Direction::from(Some(3)), Direction::Wedge(3));
        assert_eq!(Direction::from(None), Direction::None);
        assert_eq!(Direction::Wedge(1).index(), Some(1));
        assert!(Direction::default().is_none());
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::TrackingKnob.to_string(), "tracking_knob");
        let name: &'static str = Phase::Idle.into();
        assert_eq!(name, "idle");
    }
}
