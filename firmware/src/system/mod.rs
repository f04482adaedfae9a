//! Abstraction of the board peripherals used by the project.

pub mod inputs;
pub mod ticker;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use heapless::Vec;
use systick_monotonic::Systick;

use stisk_control::{ButtonConfig, Level, MAX_BUTTONS};

use inputs::{ButtonPin, Config as InputsConfig, Inputs};
use ticker::Ticker;

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub inputs: Inputs,
    pub ticker: Ticker,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;

        let ticker = Ticker::new(dp.TIM2.timer(
            Ticker::FREQUENCY_HZ.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        // The bank of panel buttons, in registration order. All of them
        // short their pin to ground when pressed.
        let buttons = {
            let mut buttons: Vec<ButtonPin, MAX_BUTTONS> = Vec::new();
            buttons
                .push(ButtonPin {
                    pin: pins.GPIO.PIN_B9.into_pull_up_input().erase(),
                    config: ButtonConfig::new("Power", Level::Low),
                })
                .ok();
            buttons
                .push(ButtonPin {
                    pin: pins.GPIO.PIN_B10.into_pull_up_input().erase(),
                    config: ButtonConfig::new("Up", Level::Low),
                })
                .ok();
            buttons
                .push(ButtonPin {
                    pin: pins.GPIO.PIN_D9.into_pull_up_input().erase(),
                    config: ButtonConfig::new("Down", Level::Low),
                })
                .ok();
            buttons
        };

        let inputs = Inputs::new(InputsConfig { buttons });

        Self {
            mono,
            status_led,
            inputs,
            ticker,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal and external memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
