//! Debounce and classification engine over the registered button bank.

use heapless::Vec;

use crate::config::{ButtonConfig, Level, MAX_BUTTONS};
use crate::event::{Event, EventHandler};
use crate::log;
use crate::snapshot::Snapshot;

/// Aggregate state over "any button active".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Released,
    Pressed,
}

/// Returned when more buttons are registered than the mask can hold.
#[derive(Debug)]
pub struct TooManyButtons;

/// Everything needed to construct the engine.
///
/// Buttons are registered in the order they are listed in, the i-th one
/// gets the mask `1 << i`. The default state exists to avoid treating a
/// button that is physically held during power-up as a fresh press.
pub struct Config<'a, H> {
    pub buttons: &'a [ButtonConfig],
    pub tick_period_ms: u32,
    pub default_state: State,
    pub handler: H,
}

/// Use this to classify presses of the whole button bank over time.
///
/// The engine is fed one `Snapshot` of raw levels per tick. A short
/// press surfaces as a click at release, a sustained one as a hold once
/// per elapsed second. Note that despite some of its attributes being
/// public, they should be only read from.
#[derive(Debug)]
pub struct Buttons<H> {
    slots: Vec<Slot, MAX_BUTTONS>,
    pub state: State,
    previous: State,
    pub pressed_mask: u16,
    pub held_secs: u8,
    tick_counter: u32,
    ticks_per_second: u32,
    pub handler: H,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Slot {
    config: ButtonConfig,
    mask: u16,
    level: Level,
}

impl Slot {
    fn active(&self) -> bool {
        self.level == self.config.active_level
    }
}

impl<H: EventHandler> Buttons<H> {
    /// Register the button bank and set up classification.
    ///
    /// # Errors
    ///
    /// Fails with `TooManyButtons` when more than `MAX_BUTTONS` buttons
    /// are listed.
    ///
    /// # Panics
    ///
    /// Panics when the tick period is zero or longer than a second. The
    /// period is expected to divide 1000 ms evenly, otherwise seconds
    /// get counted short.
    pub fn new(config: Config<H>) -> Result<Self, TooManyButtons> {
        if config.buttons.len() > MAX_BUTTONS {
            return Err(TooManyButtons);
        }
        assert!(config.tick_period_ms > 0 && config.tick_period_ms <= 1000);
        debug_assert!(1000 % config.tick_period_ms == 0);

        let mut slots = Vec::new();
        for (i, button) in config.buttons.iter().enumerate() {
            log::info!(
                "Registering button {=str} with mask {=u16}",
                button.name.as_str(),
                1u16 << i
            );
            slots
                .push(Slot {
                    mask: 1 << i,
                    level: button.active_level.inverted(),
                    config: button.clone(),
                })
                .unwrap();
        }

        let ticks_per_second = 1000 / config.tick_period_ms;
        log::info!("Hold threshold is {=u32} ticks", ticks_per_second);

        Ok(Self {
            slots,
            state: config.default_state,
            previous: config.default_state,
            pressed_mask: 0,
            held_secs: 0,
            tick_counter: 0,
            ticks_per_second,
            handler: config.handler,
        })
    }

    /// Process one snapshot of raw levels, in registration order.
    ///
    /// Expected to be invoked exactly once per tick period, from a single
    /// execution context. Never blocks, cannot fail.
    pub fn tick(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(snapshot.levels.len(), self.slots.len());

        let mut sampled_mask = 0;
        for (slot, level) in self.slots.iter_mut().zip(snapshot.levels.iter()) {
            slot.level = *level;
            if slot.active() {
                sampled_mask |= slot.mask;
            }
        }

        self.state = if sampled_mask == 0 {
            State::Released
        } else {
            State::Pressed
        };

        if self.state != self.previous {
            if self.state == State::Pressed {
                self.enter_pressed(sampled_mask);
            } else {
                self.leave_pressed();
            }
        } else if self.state == State::Pressed {
            self.count_hold(sampled_mask);
        }
    }

    fn enter_pressed(&mut self, sampled_mask: u16) {
        self.previous = State::Pressed;
        self.pressed_mask = sampled_mask;
        self.held_secs = 0;
        self.tick_counter = 0;
    }

    /// Releases below two full seconds of hold surface as clicks. Longer
    /// ones were already reported as holds and end silently.
    fn leave_pressed(&mut self) {
        if self.held_secs < 2 {
            self.handler.on_event(Event::Click {
                mask: self.pressed_mask,
                seconds: self.held_secs,
            });
        }
        self.previous = State::Released;
        self.pressed_mask = 0;
        self.held_secs = 0;
        self.tick_counter = 0;
    }

    fn count_hold(&mut self, sampled_mask: u16) {
        self.pressed_mask |= sampled_mask;
        self.tick_counter += 1;
        if self.tick_counter >= self.ticks_per_second {
            self.tick_counter = 0;
            self.held_secs = self.held_secs.saturating_add(1);
            self.handler.on_event(Event::Hold {
                mask: self.pressed_mask,
                seconds: self.held_secs,
            });
        }
    }
}
