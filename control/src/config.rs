//! Static configuration of the registered button set.

use heapless::String;

/// The mask is a 16-bit variable with its msb reserved.
pub const MAX_BUTTONS: usize = 15;

/// Names longer than this get truncated during registration.
pub const MAX_NAME_LENGTH: usize = 20;

/// Raw logic level of an input pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Description of a single button, immutable after registration.
///
/// The physical pin stays with the hardware binding. Configs and pins are
/// kept in the same registration order, that is what pairs them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Purpose of the button, e.g. "Down".
    pub name: String<MAX_NAME_LENGTH>,
    /// Level observed on the pin while the button is pressed.
    pub active_level: Level,
}

impl ButtonConfig {
    #[must_use]
    pub fn new(name: &str, active_level: Level) -> Self {
        let mut trimmed = String::new();
        for c in name.chars() {
            if trimmed.push(c).is_err() {
                break;
            }
        }
        Self {
            name: trimmed,
            active_level,
        }
    }
}
