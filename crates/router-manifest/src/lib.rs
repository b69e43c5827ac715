//! Extension manifest model and builder for Smart Router.
//!
//! This crate holds the typed `package.json` model, the literal Smart Router
//! manifest, invariant validation, rendering and drift detection.

pub mod drift;
pub mod error;
pub mod model;
pub mod ordered;
pub mod render;
pub mod smart_router;
pub mod validation;

/// The filename VS Code reads the extension manifest from.
pub const MANIFEST_FILENAME: &str = "package.json";

pub use drift::{Drift, check};
pub use error::{Error, Result};
pub use model::{
    ChatParticipant, Command, ConfigProperty, Configuration, Contributes, Engines,
    ExtensionManifest, PropertyType, SettingScope,
};
pub use ordered::OrderedMap;
pub use render::{load, parse, render, write_manifest};
pub use smart_router::smart_router_manifest;
pub use validation::{Report, Violation, validate};
