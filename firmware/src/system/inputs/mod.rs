//! Abstraction of all inputs of the module.
//!
//! The only inputs are buttons. They are grouped under a single
//! abstraction anyway, so the tick routine has one place to sample.

mod buttons;

pub use buttons::{ButtonPin, Buttons};

use heapless::Vec;
use stisk_control::{Snapshot, MAX_BUTTONS};

pub struct Inputs {
    pub buttons: Buttons,
}

pub struct Config {
    pub buttons: Vec<ButtonPin, MAX_BUTTONS>,
}

impl Inputs {
    pub fn new(config: Config) -> Self {
        Self {
            buttons: Buttons::new(config.buttons),
        }
    }

    pub fn sample(&mut self) -> Snapshot {
        self.buttons.sample()
    }
}
