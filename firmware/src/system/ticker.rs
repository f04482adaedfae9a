//! Periodic driver pacing the sampling of buttons.

use crate::system::hal::pac::TIM2;
use crate::system::hal::timer::{Event, Timer};

/// Wrapper of the timer whose update interrupt drives the tick routine.
///
/// The timer is created paused. Once started, it runs for the rest of
/// the process lifetime, there is no stop path.
pub struct Ticker {
    timer: Timer<TIM2>,
    running: bool,
}

impl Ticker {
    /// Period of one sampling tick. Must divide 1000 ms evenly, the
    /// classification engine counts seconds with it.
    pub const PERIOD_MS: u32 = 10;
    pub const FREQUENCY_HZ: u32 = 1000 / Self::PERIOD_MS;

    pub fn new(mut timer: Timer<TIM2>) -> Self {
        timer.pause();
        Self {
            timer,
            running: false,
        }
    }

    /// Start ticking. Starting an already running ticker is a no-op.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        // A stale update event would fire the interrupt right after the
        // start, on the same cycle.
        self.timer.clear_irq();
        self.timer.listen(Event::TimeOut);
        self.timer.resume();
        self.running = true;
    }

    /// Acknowledge the update event, once per interrupt.
    pub fn acknowledge(&mut self) {
        self.timer.clear_irq();
    }
}
