//! Component catalog of Lutron keypads.
//!
//! Each [`KeypadFamily`] owns a [`ModelRegistry`] that maps a model code to the buttons, LEDs and
//! contact closure inputs that model exposes, and classifies raw component ids into those types.

pub mod classify;
pub mod commands;
pub mod component;
pub mod families;
pub mod output;
pub mod registry;

pub use component::{Component, ComponentType};
pub use families::KeypadFamily;
pub use registry::{ComponentSet, Configuration, ModelRegistry};
