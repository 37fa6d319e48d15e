use crate::direction::Direction;
use async_channel::{Sender, TrySendError};
use derive_more::{Display, From, Into};
use kurbo::Point;

/// Notifications a pad sends to its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadEvent {
    DirectionChanged(Direction),
    Press,
    /// Sent on every move while the knob is dragged.
    ValueChanged { knob: Point, direction: Direction },
    Release,
}

pub trait PadObserver {
    fn notify(&mut self, event: &PadEvent);
}

/// Forwards events into a channel the host drains on its own schedule.
impl PadObserver for Sender<PadEvent> {
    fn notify(&mut self, event: &PadEvent) {
        match self.try_send(*event) {
            Ok(()) => {}
            Err(TrySendError::Full(e)) => log::warn!("Pad event channel full, dropping {:?}", e),
            Err(TrySendError::Closed(_)) => log::trace!("Pad event channel closed"),
        }
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&PadEvent)> PadObserver for FnObserver<F> {
    fn notify(&mut self, event: &PadEvent) {
        (self.0)(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct ObserverId(usize);

#[derive(Default)]
pub(crate) struct Observers {
    next_id: usize,
    entries: Vec<(ObserverId, Box<dyn PadObserver>)>,
}

impl Observers {
    pub fn subscribe(&mut self, observer: Box<dyn PadObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub fn emit(&mut self, event: PadEvent) {
        for (_, observer) in &mut self.entries {
            observer.notify(&event);
        }
    }
}
