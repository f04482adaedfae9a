#![no_main]
#![no_std]

use stisk_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use stisk_control::{Buttons, Config, Event, EventHandler, State};
    use stisk_firmware::system::inputs::Inputs;
    use stisk_firmware::system::ticker::Ticker;
    use stisk_firmware::system::System;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    /// Sink of classified events, the place to hang application actions.
    pub struct Report;

    impl EventHandler for Report {
        fn on_event(&mut self, event: Event) {
            match event {
                Event::Click { mask, seconds } => {
                    defmt::info!("CLICK: mask={=u16:b} seconds={=u8}", mask, seconds);
                }
                Event::Hold { mask, seconds } => {
                    defmt::info!("HOLD: mask={=u16:b} seconds={=u8}", mask, seconds);
                }
            }
        }
    }

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        inputs: Inputs,
        ticker: Ticker,
        buttons: Buttons<Report>,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let inputs = system.inputs;
        let mut ticker = system.ticker;

        let buttons = Buttons::new(Config {
            buttons: inputs.buttons.configs(),
            tick_period_ms: Ticker::PERIOD_MS,
            // The power button tends to be still held down when we get here.
            default_state: State::Pressed,
            handler: Report,
        })
        .unwrap();

        ticker.start();
        blink::spawn(true).unwrap();

        (
            Shared {},
            Local {
                status_led,
                inputs,
                ticker,
                buttons,
            },
            init::Monotonics(mono),
        )
    }

    #[task(binds = TIM2, local = [inputs, ticker, buttons], priority = 2)]
    fn tick(cx: tick::Context) {
        cx.local.ticker.acknowledge();
        let snapshot = cx.local.inputs.sample();
        cx.local.buttons.tick(&snapshot);
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool) {
        if on {
            cx.local.status_led.on();
            blink::spawn_after(100.millis(), false).unwrap();
        } else {
            cx.local.status_led.off();
            blink::spawn_after(2.secs(), true).unwrap();
        }
    }
}
