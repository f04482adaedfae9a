//! Helpers shared by the interactive hardware tests.

use crate::system::inputs::Inputs;

/// Keep sampling until one of the buttons reads pressed, return its index.
pub fn sample_until_a_button_is_pressed(inputs: &mut Inputs) -> usize {
    loop {
        let snapshot = inputs.sample();
        let configs = inputs.buttons.configs();
        for (i, level) in snapshot.levels.iter().enumerate() {
            if *level == configs[i].active_level {
                return i;
            }
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}

/// Keep sampling until every button reads released.
pub fn sample_until_all_buttons_are_released(inputs: &mut Inputs) {
    loop {
        let snapshot = inputs.sample();
        let configs = inputs.buttons.configs();
        let any_pressed = snapshot
            .levels
            .iter()
            .zip(configs)
            .any(|(level, config)| *level == config.active_level);
        if !any_pressed {
            return;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
