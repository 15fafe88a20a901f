//! The virtual keypad of a RadioRA 2 main repeater: 100 buttons, each with an LED.

use crate::classify::{IdRange, IdRanges};
use crate::registry::{Generator, ModelRegistry, Models};

const BUTTON_IDS: &[IdRange] = &[IdRange::new(1, 100)];
const LED_IDS: &[IdRange] = &[IdRange::new(101, 200)];

// All channels of the virtual keypad are advanced.
pub(super) static REGISTRY: ModelRegistry = ModelRegistry::new(
    "virtual",
    IdRanges::new(BUTTON_IDS, LED_IDS, &[]),
    Models::Generated(Generator {
        count: 100,
        led_offset: 100,
        button_description: "Virtual Button",
        led_description: "Virtual LED",
    }),
    true,
);
