//! Classified button events and the handler seam.

/// A classified press episode, or a whole second of an ongoing one.
///
/// The mask is the union of masks of every button that took part in the
/// episode. Seconds are whole seconds of hold time: always below 2 for a
/// click, growing from 1 for consecutive holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    Click { mask: u16, seconds: u8 },
    Hold { mask: u16, seconds: u8 },
}

/// Single notification point for classified events.
///
/// An implementation is handed over to the engine during construction
/// and invoked from the tick routine. It must not block.
pub trait EventHandler {
    fn on_event(&mut self, event: Event);
}

/// Events are silently discarded when no real handler is plugged in.
impl EventHandler for () {
    fn on_event(&mut self, _event: Event) {}
}
