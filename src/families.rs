mod intl;
mod tabletop;
mod virtual_keypad;

use crate::registry::ModelRegistry;

/// Declares the component catalog of a keypad family as a list of constants.
macro_rules! catalog {
    ($($name: ident: $kind: ident $id: literal, $channel: literal $(, $description: literal)?;)*) => {
        $(const $name: Component = Component::$kind($id, $channel $(, $description)?);)*
    };
}

pub(crate) use catalog;

/// A line of keypad hardware sharing one id convention.
#[derive(
    clap::ValueEnum,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    serde::Serialize,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KeypadFamily {
    /// International seeTouch keypads used in HomeWorks QS systems.
    International,
    /// Tabletop seeTouch keypads.
    Tabletop,
    /// Virtual buttons on a RadioRA 2 main repeater.
    Virtual,
}

impl KeypadFamily {
    pub fn registry(self) -> &'static ModelRegistry {
        match self {
            KeypadFamily::International => &intl::REGISTRY,
            KeypadFamily::Tabletop => &tabletop::REGISTRY,
            KeypadFamily::Virtual => &virtual_keypad::REGISTRY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentType;
    use std::collections::HashSet;
    use strum::VariantArray as _;

    #[test]
    fn classifiers_are_disjoint() {
        for family in KeypadFamily::VARIANTS {
            let registry = family.registry();
            for id in 0..=u16::from(u8::MAX) {
                let hits = [registry.is_button(id), registry.is_led(id), registry.is_cci(id)];
                assert!(
                    hits.iter().filter(|hit| **hit).count() <= 1,
                    "{family}: id {id} matches more than one component type"
                );
            }
        }
    }

    #[test]
    fn component_types_agree_with_classifier() {
        for family in KeypadFamily::VARIANTS {
            let registry = family.registry();
            for model in registry.model_codes() {
                let config = registry.components_for(Some(model));
                for component in config.components.iter() {
                    assert_eq!(
                        registry.classify(component.id()),
                        Some(component.kind()),
                        "{family} {model}: {component}"
                    );
                }
            }
        }
    }

    #[test]
    fn ids_and_channels_are_unique() {
        for family in KeypadFamily::VARIANTS {
            let registry = family.registry();
            for model in registry.model_codes() {
                let set = registry.components_for(Some(model)).components;
                let ids: HashSet<_> = set.iter().map(|c| c.id()).collect();
                let channels: HashSet<_> = set.iter().map(|c| c.channel()).collect();
                assert_eq!(ids.len(), set.len(), "{family} {model}");
                assert_eq!(channels.len(), set.len(), "{family} {model}");
            }
        }
    }

    #[test]
    fn known_models_are_stable() {
        for family in KeypadFamily::VARIANTS {
            let registry = family.registry();
            assert!(registry.model_codes().any(|m| m == "Generic"), "{family}");
            for model in registry.model_codes() {
                let first = registry.components_for(Some(model));
                let second = registry.components_for(Some(model));
                assert!(!first.components.is_empty(), "{family} {model}");
                assert_eq!(first.warning, None, "{family} {model}");
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn every_component_kind_is_declared_somewhere() {
        let declared: HashSet<_> = KeypadFamily::VARIANTS
            .iter()
            .flat_map(|f| f.registry().components_for(None).components.iter().map(|c| c.kind()).collect::<Vec<_>>())
            .collect();
        for kind in <ComponentType as strum::VariantArray>::VARIANTS {
            assert!(declared.contains(kind), "{kind}");
        }
    }

    #[test]
    fn family_names() {
        assert_eq!(KeypadFamily::International.to_string(), "international");
        assert_eq!(KeypadFamily::Virtual.registry().name(), "virtual");
    }
}
