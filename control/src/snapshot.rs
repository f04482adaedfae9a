//! Structure used to pass the current state of button pins.

use heapless::Vec;

use crate::config::{Level, MAX_BUTTONS};

/// Raw levels of all registered buttons, in registration order.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// classification engine, once per tick. It carries raw pin levels,
/// translation through active levels happens in the engine.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub levels: Vec<Level, MAX_BUTTONS>,
}

impl Snapshot {
    /// # Panics
    ///
    /// Panics when more than `MAX_BUTTONS` levels are given.
    #[must_use]
    pub fn from_levels(levels: &[Level]) -> Self {
        Self {
            levels: Vec::from_slice(levels).unwrap(),
        }
    }
}
