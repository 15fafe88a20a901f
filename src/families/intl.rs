//! International seeTouch keypads, as found in HomeWorks QS installations.

use super::catalog;
use crate::classify::{IdRange, IdRanges};
use crate::component::Component;
use crate::registry::{Layout, ModelEntry, ModelRegistry, Models};

catalog! {
    BUTTON1: button 1, "button1", "Button 1";
    BUTTON2: button 2, "button2", "Button 2";
    BUTTON3: button 3, "button3", "Button 3";
    BUTTON4: button 4, "button4", "Button 4";
    BUTTON5: button 5, "button5", "Button 5";
    BUTTON6: button 6, "button6", "Button 6";
    BUTTON7: button 7, "button7", "Button 7";
    BUTTON8: button 8, "button8", "Button 8";
    BUTTON9: button 9, "button9", "Button 9";
    BUTTON10: button 10, "button10", "Button 10";

    LOWER: button 18, "buttonlower", "Lower button";
    RAISE: button 19, "buttonraise", "Raise button";

    CCI1: cci 25, "cci1";
    CCI2: cci 26, "cci2";

    LED1: led 81, "led1", "LED 1";
    LED2: led 82, "led2", "LED 2";
    LED3: led 83, "led3", "LED 3";
    LED4: led 84, "led4", "LED 4";
    LED5: led 85, "led5", "LED 5";
    LED6: led 86, "led6", "LED 6";
    LED7: led 87, "led7", "LED 7";
    LED8: led 88, "led8", "LED 8";
    LED9: led 89, "led9", "LED 9";
    LED10: led 90, "led10", "LED 10";
}

const BUTTON_IDS: &[IdRange] = &[IdRange::new(1, 10), IdRange::new(18, 19)];
const LED_IDS: &[IdRange] = &[IdRange::new(81, 90)];
const CCI_IDS: &[IdRange] = &[IdRange::new(25, 26)];

const CCIS: &[Component] = &[CCI1, CCI2];

const M2B: &[Component] = &[BUTTON7, BUTTON9, LED7, LED9];
const M3B: &[Component] = &[BUTTON6, BUTTON8, BUTTON10, LED6, LED8, LED10];
const M4B: &[Component] = &[BUTTON2, BUTTON4, BUTTON7, BUTTON9, LED2, LED4, LED7, LED9];
#[rustfmt::skip]
const M5BRL: &[Component] = &[
    BUTTON6, BUTTON7, BUTTON8, BUTTON9, BUTTON10, LOWER, RAISE,
    LED6, LED7, LED8, LED9, LED10,
];
#[rustfmt::skip]
const M6BRL: &[Component] = &[
    BUTTON1, BUTTON3, BUTTON5, BUTTON6, BUTTON8, BUTTON10, LOWER, RAISE,
    LED1, LED3, LED5, LED6, LED8, LED10,
];
#[rustfmt::skip]
const M7BRL: &[Component] = &[
    BUTTON2, BUTTON4, BUTTON6, BUTTON7, BUTTON8, BUTTON9, BUTTON10, LOWER, RAISE,
    LED2, LED4, LED6, LED7, LED8, LED9, LED10,
];
#[rustfmt::skip]
const M8BRL: &[Component] = &[
    BUTTON1, BUTTON3, BUTTON5, BUTTON6, BUTTON7, BUTTON8, BUTTON9, BUTTON10, LOWER, RAISE,
    LED1, LED3, LED5, LED6, LED7, LED8, LED9, LED10,
];
#[rustfmt::skip]
const M10BRL: &[Component] = &[
    BUTTON1, BUTTON2, BUTTON3, BUTTON4, BUTTON5, BUTTON6, BUTTON7, BUTTON8, BUTTON9, BUTTON10,
    LOWER, RAISE,
    LED1, LED2, LED3, LED4, LED5, LED6, LED7, LED8, LED9, LED10,
];

const MODELS: &[ModelEntry] = &[
    ModelEntry { code: "2B", layout: Layout::Listed(M2B) },
    ModelEntry { code: "3B", layout: Layout::Listed(M3B) },
    ModelEntry { code: "4B", layout: Layout::Listed(M4B) },
    ModelEntry { code: "5BRL", layout: Layout::Listed(M5BRL) },
    ModelEntry { code: "6BRL", layout: Layout::Listed(M6BRL) },
    ModelEntry { code: "7BRL", layout: Layout::Listed(M7BRL) },
    ModelEntry { code: "8BRL", layout: Layout::Listed(M8BRL) },
    ModelEntry { code: "10BRL", layout: Layout::Listed(M10BRL) },
    ModelEntry { code: "Generic", layout: Layout::Listed(M10BRL) },
];

pub(super) static REGISTRY: ModelRegistry = ModelRegistry::new(
    "international",
    IdRanges::new(BUTTON_IDS, LED_IDS, CCI_IDS),
    Models::Table { models: MODELS, fallback: "10BRL", common: CCIS },
    false,
);
