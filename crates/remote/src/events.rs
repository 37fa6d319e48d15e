use dpad::PadEvent;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Pad(PadEvent),
    ConfigReload,
}
