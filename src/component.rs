use std::borrow::Cow;

/// What kind of physical control element a [`Component`] is.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ComponentType {
    Button,
    Led,
    /// Contact closure input.
    Cci,
}

/// A single button, LED or contact closure input on a keypad.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Component {
    id: u16,
    channel: Cow<'static, str>,
    description: Cow<'static, str>,
    #[serde(rename = "type")]
    kind: ComponentType,
}

impl Component {
    pub const fn new(
        id: u16,
        channel: &'static str,
        description: &'static str,
        kind: ComponentType,
    ) -> Self {
        Self {
            id,
            channel: Cow::Borrowed(channel),
            description: Cow::Borrowed(description),
            kind,
        }
    }

    pub const fn button(id: u16, channel: &'static str, description: &'static str) -> Self {
        Self::new(id, channel, description, ComponentType::Button)
    }

    pub const fn led(id: u16, channel: &'static str, description: &'static str) -> Self {
        Self::new(id, channel, description, ComponentType::Led)
    }

    pub const fn cci(id: u16, channel: &'static str) -> Self {
        Self::new(id, channel, "", ComponentType::Cci)
    }

    /// Construct a component whose channel name is computed at runtime.
    pub fn generated(id: u16, channel: String, description: &'static str, kind: ComponentType) -> Self {
        Self {
            id,
            channel: Cow::Owned(channel),
            description: Cow::Borrowed(description),
            kind,
        }
    }

    /// Component number as used on the wire.
    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ComponentType {
        self.kind
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.id, self.channel)
    }
}
