//! Reading of raw levels of the button pins.

use heapless::Vec;

use crate::system::hal::gpio::{ErasedPin, Input};
use stisk_control::{ButtonConfig, Level, Snapshot, MAX_BUTTONS};

/// One registered button: its pin and its description.
///
/// The classification engine works with configs only, pins stay here.
/// The two are paired by their position in the registration list.
pub struct ButtonPin {
    pub pin: ErasedPin<Input>,
    pub config: ButtonConfig,
}

pub struct Buttons {
    pins: Vec<ErasedPin<Input>, MAX_BUTTONS>,
    configs: Vec<ButtonConfig, MAX_BUTTONS>,
}

impl Buttons {
    pub fn new(buttons: Vec<ButtonPin, MAX_BUTTONS>) -> Self {
        let mut pins = Vec::new();
        let mut configs = Vec::new();
        for button in buttons {
            pins.push(button.pin).ok();
            configs.push(button.config).ok();
        }
        Self { pins, configs }
    }

    #[must_use]
    pub fn configs(&self) -> &[ButtonConfig] {
        &self.configs
    }

    /// Read the instantaneous level of every pin, in registration order.
    #[must_use]
    pub fn sample(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for pin in &self.pins {
            let level = if pin.is_high() {
                Level::High
            } else {
                Level::Low
            };
            snapshot.levels.push(level).ok();
        }
        snapshot
    }
}
