use crate::component::ComponentType;

/// An inclusive range of component ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange {
    first: u16,
    last: u16,
}

impl IdRange {
    pub const fn new(first: u16, last: u16) -> Self {
        assert!(first <= last, "id range is empty");
        Self { first, last }
    }

    pub const fn contains(&self, id: u16) -> bool {
        id >= self.first && id <= self.last
    }

    pub const fn overlaps(&self, other: &IdRange) -> bool {
        self.first <= other.last && other.first <= self.last
    }

    pub fn first(&self) -> u16 {
        self.first
    }

    pub fn last(&self) -> u16 {
        self.last
    }
}

const fn any_contains(ranges: &[IdRange], id: u16) -> bool {
    let mut idx = 0;
    while idx < ranges.len() {
        if ranges[idx].contains(id) {
            return true;
        }
        idx += 1;
    }
    false
}

const fn any_overlap(a: &[IdRange], b: &[IdRange]) -> bool {
    let mut i = 0;
    while i < a.len() {
        let mut j = 0;
        while j < b.len() {
            if a[i].overlaps(&b[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

/// The id ranges a keypad family reserves for each component type.
///
/// Ranges are fixed per family and do not depend on which model is installed.
#[derive(Clone, Copy, Debug)]
pub struct IdRanges {
    buttons: &'static [IdRange],
    leds: &'static [IdRange],
    ccis: &'static [IdRange],
}

impl IdRanges {
    /// Fails const evaluation if any two of the component types share an id.
    pub const fn new(
        buttons: &'static [IdRange],
        leds: &'static [IdRange],
        ccis: &'static [IdRange],
    ) -> Self {
        assert!(!any_overlap(buttons, leds), "button and LED id ranges overlap");
        assert!(!any_overlap(buttons, ccis), "button and CCI id ranges overlap");
        assert!(!any_overlap(leds, ccis), "LED and CCI id ranges overlap");
        Self { buttons, leds, ccis }
    }

    pub const fn is_button(&self, id: u16) -> bool {
        any_contains(self.buttons, id)
    }

    pub const fn is_led(&self, id: u16) -> bool {
        any_contains(self.leds, id)
    }

    pub const fn is_cci(&self, id: u16) -> bool {
        any_contains(self.ccis, id)
    }

    /// Classify a raw component id, trying buttons, then LEDs, then CCIs.
    pub const fn classify(&self, id: u16) -> Option<ComponentType> {
        if self.is_button(id) {
            Some(ComponentType::Button)
        } else if self.is_led(id) {
            Some(ComponentType::Led)
        } else if self.is_cci(id) {
            Some(ComponentType::Cci)
        } else {
            None
        }
    }

    pub fn ranges(&self, kind: ComponentType) -> &'static [IdRange] {
        match kind {
            ComponentType::Button => self.buttons,
            ComponentType::Led => self.leds,
            ComponentType::Cci => self.ccis,
        }
    }
}
