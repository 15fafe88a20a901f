use crate::classify::IdRanges;
use crate::component::{Component, ComponentType};

/// Model code assumed when a device has no model configured.
pub const GENERIC_MODEL: &str = "Generic";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no valid keypad model defined ({model}), assuming {fallback}")]
    UnrecognizedModel { model: String, fallback: &'static str },
}

/// How a model's component list is put together.
#[derive(Clone, Copy, Debug)]
pub enum Layout {
    /// A hand-picked subset of the family catalog.
    Listed(&'static [Component]),
    /// An ordered concatenation of reusable component groups.
    Composed(&'static [&'static [Component]]),
}

impl Layout {
    fn components(self) -> impl Iterator<Item = &'static Component> {
        let (listed, groups): (&'static [Component], &'static [&'static [Component]]) = match self {
            Layout::Listed(list) => (list, &[]),
            Layout::Composed(groups) => (&[], groups),
        };
        listed.iter().chain(groups.iter().flat_map(|group| *group))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ModelEntry {
    pub code: &'static str,
    pub layout: Layout,
}

/// Parameters for families whose components are produced by formula rather than a table.
#[derive(Clone, Copy, Debug)]
pub struct Generator {
    pub count: u16,
    /// Added to the button index to obtain the id of the matching LED.
    pub led_offset: u16,
    pub button_description: &'static str,
    pub led_description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub enum Models {
    Table {
        models: &'static [ModelEntry],
        /// Model used in place of codes missing from `models`.
        fallback: &'static str,
        /// Components present on every model of the family.
        common: &'static [Component],
    },
    Generated(Generator),
}

/// Maps model codes of one keypad family to their components.
#[derive(Debug)]
pub struct ModelRegistry {
    name: &'static str,
    ranges: IdRanges,
    models: Models,
    advanced_channels: bool,
}

impl ModelRegistry {
    pub const fn new(
        name: &'static str,
        ranges: IdRanges,
        models: Models,
        advanced_channels: bool,
    ) -> Self {
        Self { name, ranges, models, advanced_channels }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ranges(&self) -> &IdRanges {
        &self.ranges
    }

    /// Whether the host should mark every channel of this family as advanced.
    pub fn advanced_channels(&self) -> bool {
        self.advanced_channels
    }

    pub fn is_button(&self, id: u16) -> bool {
        self.ranges.is_button(id)
    }

    pub fn is_led(&self, id: u16) -> bool {
        self.ranges.is_led(id)
    }

    pub fn is_cci(&self, id: u16) -> bool {
        self.ranges.is_cci(id)
    }

    pub fn classify(&self, id: u16) -> Option<ComponentType> {
        self.ranges.classify(id)
    }

    /// Model codes with an explicit table entry, in declaration order.
    ///
    /// Generated families accept any code and report only [`GENERIC_MODEL`].
    pub fn model_codes(&self) -> impl Iterator<Item = &'static str> {
        let models: &'static [ModelEntry] = match self.models {
            Models::Table { models, .. } => models,
            Models::Generated(_) => &[],
        };
        let generic = matches!(self.models, Models::Generated(_)).then_some(GENERIC_MODEL);
        models.iter().map(|entry| entry.code).chain(generic)
    }

    fn entry(models: &'static [ModelEntry], code: &str) -> Option<&'static ModelEntry> {
        models.iter().find(|entry| entry.code == code)
    }

    /// Select the components of a model.
    ///
    /// Never fails: an unknown model is replaced by the family's fallback model and reported
    /// through [`Configuration::warning`].
    pub fn components_for(&self, model: Option<&str>) -> Configuration {
        let requested = model.unwrap_or(GENERIC_MODEL);
        tracing::debug!(family = self.name, model = requested, "configuring components for keypad model");
        match self.models {
            Models::Generated(generator) => Configuration {
                model: GENERIC_MODEL,
                components: generator.generate(),
                warning: None,
            },
            Models::Table { models, fallback, common } => {
                let (entry, warning) = match Self::entry(models, requested) {
                    Some(entry) => (entry, None),
                    None => {
                        tracing::warn!(
                            family = self.name,
                            model = requested,
                            fallback,
                            "no valid keypad model defined, assuming the fallback model"
                        );
                        let warning = Error::UnrecognizedModel {
                            model: requested.to_string(),
                            fallback,
                        };
                        // Only reachable for a table that lacks its own fallback entry.
                        let Some(entry) = Self::entry(models, fallback) else {
                            return Configuration {
                                model: fallback,
                                components: ComponentSet::from_iter(common.iter().cloned()),
                                warning: Some(warning),
                            };
                        };
                        (entry, Some(warning))
                    }
                };
                let all = common.iter().chain(entry.layout.components()).cloned();
                Configuration {
                    model: entry.code,
                    components: ComponentSet::from_iter(all),
                    warning,
                }
            }
        }
    }
}

impl Generator {
    fn generate(&self) -> ComponentSet {
        let mut set = ComponentSet::default();
        for n in 1..=self.count {
            set.buttons.push(Component::generated(
                n,
                format!("button{n}"),
                self.button_description,
                ComponentType::Button,
            ));
            set.leds.push(Component::generated(
                n + self.led_offset,
                format!("led{n}"),
                self.led_description,
                ComponentType::Led,
            ));
        }
        set
    }
}

/// Components of one keypad, split by type with declaration order kept inside each list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ComponentSet {
    pub buttons: Vec<Component>,
    pub leds: Vec<Component>,
    pub ccis: Vec<Component>,
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut set = Self::default();
        for component in iter {
            match component.kind() {
                ComponentType::Button => set.buttons.push(component),
                ComponentType::Led => set.leds.push(component),
                ComponentType::Cci => set.ccis.push(component),
            }
        }
        set
    }
}

impl ComponentSet {
    /// All components: buttons first, then LEDs, then CCIs.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.buttons.iter().chain(&self.leds).chain(&self.ccis)
    }

    pub fn len(&self) -> usize {
        self.buttons.len() + self.leds.len() + self.ccis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn by_id(&self, id: u16) -> Option<&Component> {
        self.iter().find(|c| c.id() == id)
    }

    pub fn by_channel(&self, channel: &str) -> Option<&Component> {
        self.iter().find(|c| c.channel() == channel)
    }
}

/// Result of resolving a model code within a family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// The model whose components were selected.
    pub model: &'static str,
    pub components: ComponentSet,
    /// Set when the requested model was unknown and `model` is the fallback.
    pub warning: Option<Error>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::IdRange;

    const B1: Component = Component::button(1, "button1", "Button 1");
    const B2: Component = Component::button(2, "button2", "Button 2");
    const B3: Component = Component::button(3, "button3", "Button 3");
    const L1: Component = Component::led(11, "led1", "LED 1");
    const C1: Component = Component::cci(21, "cci1");

    const SMALL: &[Component] = &[B1, L1];
    const GROUP_A: &[Component] = &[B2, B1];
    const GROUP_B: &[Component] = &[L1, B3];
    const LARGE: &[&[Component]] = &[GROUP_A, GROUP_B];

    const BUTTON_IDS: &[IdRange] = &[IdRange::new(1, 10)];
    const LED_IDS: &[IdRange] = &[IdRange::new(11, 20)];
    const CCI_IDS: &[IdRange] = &[IdRange::new(21, 21)];
    const COMMON: &[Component] = &[C1];
    const MODELS: &[ModelEntry] = &[
        ModelEntry { code: "S", layout: Layout::Listed(SMALL) },
        ModelEntry { code: "L", layout: Layout::Composed(LARGE) },
    ];

    static REGISTRY: ModelRegistry = ModelRegistry::new(
        "test",
        IdRanges::new(BUTTON_IDS, LED_IDS, CCI_IDS),
        Models::Table { models: MODELS, fallback: "L", common: COMMON },
        false,
    );

    static BROKEN: ModelRegistry = ModelRegistry::new(
        "broken",
        IdRanges::new(&[], &[], CCI_IDS),
        Models::Table { models: &[], fallback: "missing", common: COMMON },
        false,
    );

    #[test]
    fn listed_model() {
        let config = REGISTRY.components_for(Some("S"));
        assert_eq!(config.model, "S");
        assert_eq!(config.warning, None);
        assert_eq!(config.components.buttons, vec![B1]);
        assert_eq!(config.components.leds, vec![L1]);
        assert_eq!(config.components.ccis, vec![C1]);
    }

    #[test]
    fn composed_model_keeps_declaration_order() {
        let config = REGISTRY.components_for(Some("L"));
        assert_eq!(config.components.buttons, vec![B2, B1, B3]);
        assert_eq!(config.components.leds, vec![L1]);
        let all: Vec<_> = config.components.iter().map(Component::id).collect();
        assert_eq!(all, vec![2, 1, 3, 11, 21]);
    }

    #[test]
    fn unknown_model_falls_back_with_warning() {
        let config = REGISTRY.components_for(Some("s"));
        assert_eq!(config.model, "L");
        assert_eq!(config.components, REGISTRY.components_for(Some("L")).components);
        assert_eq!(
            config.warning,
            Some(Error::UnrecognizedModel { model: "s".to_string(), fallback: "L" })
        );
    }

    #[test]
    fn missing_model_means_generic() {
        let config = REGISTRY.components_for(None);
        assert_eq!(
            config.warning,
            Some(Error::UnrecognizedModel { model: GENERIC_MODEL.to_string(), fallback: "L" })
        );
    }

    #[test]
    fn missing_fallback_still_yields_common_components() {
        let config = BROKEN.components_for(Some("anything"));
        assert_eq!(config.model, "missing");
        assert_eq!(config.components.ccis, vec![C1]);
        assert!(config.components.buttons.is_empty());
        assert!(config.warning.is_some());
    }

    #[test]
    fn lookups() {
        let set = REGISTRY.components_for(Some("L")).components;
        assert_eq!(set.len(), 5);
        assert_eq!(set.by_id(3), Some(&B3));
        assert_eq!(set.by_channel("cci1"), Some(&C1));
        assert_eq!(set.by_id(4), None);
        assert_eq!(set.by_channel("button4"), None);
    }

    #[test]
    fn codes() {
        assert_eq!(REGISTRY.model_codes().collect::<Vec<_>>(), vec!["S", "L"]);
    }

    #[test]
    fn warning_message() {
        let e = Error::UnrecognizedModel { model: "XYZ".into(), fallback: "10BRL" };
        assert_eq!(e.to_string(), "no valid keypad model defined (XYZ), assuming 10BRL");
    }
}
