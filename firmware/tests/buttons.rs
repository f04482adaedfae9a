#![no_std]
#![no_main]

use stisk_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use stisk_firmware::system::inputs::Inputs;
    use stisk_firmware::system::System;
    use stisk_firmware::testlib::{
        sample_until_a_button_is_pressed, sample_until_all_buttons_are_released,
    };

    #[init]
    fn init() -> Inputs {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();

        System::init(cp, dp).inputs
    }

    #[test]
    fn buttons_get_detected_in_registration_order(inputs: &mut Inputs) {
        for i in 0..inputs.buttons.configs().len() {
            let name = inputs.buttons.configs()[i].name.clone();
            defmt::info!("Press and release the {=str} button", name.as_str());
            let pressed = sample_until_a_button_is_pressed(inputs);
            defmt::assert_eq!(pressed, i);
            sample_until_all_buttons_are_released(inputs);
            defmt::info!("OK");
        }
    }
}
