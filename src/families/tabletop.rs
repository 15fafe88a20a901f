//! Tabletop seeTouch keypads.
//!
//! Every model is assembled from rows of five buttons and a bottom row, which is either two
//! extra buttons with one raise/lower pair (`RL`) or three raise/lower pairs (`CRL`).

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
    BUTTON11: button 11, "button11", "Button 11";
    BUTTON12: button 12, "button12", "Button 12";
    BUTTON13: button 13, "button13", "Button 13";
    BUTTON14: button 14, "button14", "Button 14";
    BUTTON15: button 15, "button15", "Button 15";

    BUTTON16: button 16, "button16", "Button 16";
    BUTTON17: button 17, "button17", "Button 17";

    LOWER1: button 20, "buttonlower1", "Lower button 1";
    RAISE1: button 21, "buttonraise1", "Raise button 1";
    LOWER2: button 22, "buttonlower2", "Lower button 2";
    RAISE2: button 23, "buttonraise2", "Raise button 2";
    LOWER3: button 24, "buttonlower3", "Lower button 3";
    RAISE3: button 25, "buttonraise3", "Raise button 3";

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
    LED11: led 91, "led11", "LED 11";
    LED12: led 92, "led12", "LED 12";
    LED13: led 93, "led13", "LED 13";
    LED14: led 94, "led14", "LED 14";
    LED15: led 95, "led15", "LED 15";

    LED16: led 96, "led16", "LED 16";
    LED17: led 97, "led17", "LED 17";
}

const BUTTON_IDS: &[IdRange] = &[IdRange::new(1, 25)];
const LED_IDS: &[IdRange] = &[IdRange::new(81, 97)];

const BUTTON_ROW1: &[Component] = &[BUTTON1, BUTTON2, BUTTON3, BUTTON4, BUTTON5];
const BUTTON_ROW2: &[Component] = &[BUTTON6, BUTTON7, BUTTON8, BUTTON9, BUTTON10];
const BUTTON_ROW3: &[Component] = &[BUTTON11, BUTTON12, BUTTON13, BUTTON14, BUTTON15];

const BOTTOM_RL: &[Component] = &[BUTTON16, BUTTON17, LOWER3, RAISE3];
const BOTTOM_CRL: &[Component] = &[LOWER1, RAISE1, LOWER2, RAISE2, LOWER3, RAISE3];
#[rustfmt::skip]
const BOTTOM_GENERIC: &[Component] = &[
    BUTTON16, BUTTON17, LOWER1, RAISE1, LOWER2, RAISE2, LOWER3, RAISE3,
];

const LED_ROW1: &[Component] = &[LED1, LED2, LED3, LED4, LED5];
const LED_ROW2: &[Component] = &[LED6, LED7, LED8, LED9, LED10];
const LED_ROW3: &[Component] = &[LED11, LED12, LED13, LED14, LED15];

const LED_BOTTOM_RL: &[Component] = &[LED16, LED17];

const T5RL: &[&[Component]] = &[BUTTON_ROW1, BOTTOM_RL, LED_ROW1, LED_BOTTOM_RL];
#[rustfmt::skip]
const T10RL: &[&[Component]] = &[
    BUTTON_ROW1, BUTTON_ROW2, BOTTOM_RL,
    LED_ROW1, LED_ROW2, LED_BOTTOM_RL,
];
#[rustfmt::skip]
const T15RL: &[&[Component]] = &[
    BUTTON_ROW1, BUTTON_ROW2, BUTTON_ROW3, BOTTOM_RL,
    LED_ROW1, LED_ROW2, LED_ROW3, LED_BOTTOM_RL,
];
const T5CRL: &[&[Component]] = &[BUTTON_ROW1, BOTTOM_CRL, LED_ROW1];
const T10CRL: &[&[Component]] = &[BUTTON_ROW1, BUTTON_ROW2, BOTTOM_CRL, LED_ROW1, LED_ROW2];
#[rustfmt::skip]
const T15CRL: &[&[Component]] = &[
    BUTTON_ROW1, BUTTON_ROW2, BUTTON_ROW3, BOTTOM_CRL,
    LED_ROW1, LED_ROW2, LED_ROW3,
];
// Strict superset of all the models above.
#[rustfmt::skip]
const GENERIC: &[&[Component]] = &[
    BUTTON_ROW1, BUTTON_ROW2, BUTTON_ROW3, BOTTOM_GENERIC,
    LED_ROW1, LED_ROW2, LED_ROW3, LED_BOTTOM_RL,
];

const MODELS: &[ModelEntry] = &[
    ModelEntry { code: "T5RL", layout: Layout::Composed(T5RL) },
    ModelEntry { code: "T10RL", layout: Layout::Composed(T10RL) },
    ModelEntry { code: "T15RL", layout: Layout::Composed(T15RL) },
    ModelEntry { code: "T5CRL", layout: Layout::Composed(T5CRL) },
    ModelEntry { code: "T10CRL", layout: Layout::Composed(T10CRL) },
    ModelEntry { code: "T15CRL", layout: Layout::Composed(T15CRL) },
    ModelEntry { code: "Generic", layout: Layout::Composed(GENERIC) },
];

pub(super) static REGISTRY: ModelRegistry = ModelRegistry::new(
    "tabletop",
    IdRanges::new(BUTTON_IDS, LED_IDS, &[]),
    Models::Table { models: MODELS, fallback: "Generic", common: &[] },
    false,
);

#[cfg(test)]
mod tests {
    use super::REGISTRY;
    use crate::component::Component;
    use std::collections::BTreeSet;

    fn ids(components: &[Component]) -> Vec<u16> {
        components.iter().map(Component::id).collect()
    }

    #[test]
    fn ranges() {
        assert!(!REGISTRY.is_button(0));
        assert!(REGISTRY.is_button(1));
        assert!(REGISTRY.is_button(25));
        assert!(!REGISTRY.is_button(26));
        assert!(REGISTRY.is_led(81));
        assert!(REGISTRY.is_led(97));
        assert!(!REGISTRY.is_led(98));
        for id in 0..=300 {
            assert!(!REGISTRY.is_cci(id));
        }
    }

    #[test]
    fn t5rl() {
        let set = REGISTRY.components_for(Some("T5RL")).components;
        assert_eq!(ids(&set.buttons), vec![1, 2, 3, 4, 5, 16, 17, 24, 25]);
        assert_eq!(ids(&set.leds), vec![81, 82, 83, 84, 85, 96, 97]);
        assert!(set.ccis.is_empty());
    }

    #[test]
    fn crl_models_have_no_bottom_leds() {
        for model in ["T5CRL", "T10CRL", "T15CRL"] {
            let set = REGISTRY.components_for(Some(model)).components;
            assert!(set.leds.iter().all(|led| led.id() <= 95), "{model}");
            assert_eq!(&ids(&set.buttons)[set.buttons.len() - 6..], &[20, 21, 22, 23, 24, 25]);
        }
        let set = REGISTRY.components_for(Some("T15CRL")).components;
        assert_eq!(set.buttons.len(), 21);
        assert_eq!(set.leds.len(), 15);
    }

    #[test]
    fn generic_is_superset() {
        let generic = REGISTRY.components_for(Some("Generic")).components;
        let generic_ids: BTreeSet<_> = generic.iter().map(Component::id).collect();
        for model in ["T5RL", "T10RL", "T15RL", "T5CRL", "T10CRL", "T15CRL"] {
            let set = REGISTRY.components_for(Some(model)).components;
            let model_ids: BTreeSet<_> = set.iter().map(Component::id).collect();
            assert!(model_ids.is_subset(&generic_ids), "{model}");
            assert!(model_ids.len() < generic_ids.len(), "{model}");
        }
        assert_eq!(generic.buttons.len(), 23);
        assert_eq!(generic.leds.len(), 17);
    }

    #[test]
    fn unknown_model_assumes_generic() {
        let config = REGISTRY.components_for(Some("T20RL"));
        assert_eq!(config.model, "Generic");
        assert!(config.warning.is_some());
        assert_eq!(config.components, REGISTRY.components_for(Some("Generic")).components);
    }
}
