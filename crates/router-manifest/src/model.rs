//! Typed model of a VS Code extension `package.json`.
//!
//! Field declaration order is serialization order, so the structs below
//! mirror the layout of the file they produce:
//!
//! ```json
//! {
//!   "name": "smart-router",
//!   "displayName": "Smart Router",
//!   "version": "0.2.0",
//!   "engines": { "vscode": "^1.74.0" },
//!   "contributes": {
//!     "chatParticipants": [ { "id": "smart", "isSticky": true } ],
//!     "commands": [ { "command": "smart.showCosts" } ],
//!     "configuration": { "title": "Smart Router", "properties": { } }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ordered::OrderedMap;

/// Complete extension manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    /// Package name (e.g., "smart-router").
    pub name: String,
    /// Name shown in the marketplace and extension list.
    pub display_name: String,
    pub description: String,
    /// Semver version string.
    pub version: String,
    /// Host version constraints.
    pub engines: Engines,
    /// Marketplace categories.
    pub categories: Vec<String>,
    /// Events that cause the host to load the extension.
    pub activation_events: Vec<String>,
    /// Entry point script, relative to the extension root.
    pub main: String,
    /// UI surface contributed to the host.
    pub contributes: Contributes,
    /// npm scripts run at build time.
    pub scripts: OrderedMap<String>,
    pub dev_dependencies: OrderedMap<String>,
    pub dependencies: OrderedMap<String>,
}

/// Host version constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engines {
    /// Version range of VS Code the extension runs on (e.g., "^1.74.0").
    pub vscode: String,
}

/// Everything the extension contributes to the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributes {
    pub chat_participants: Vec<ChatParticipant>,
    pub commands: Vec<Command>,
    pub configuration: Configuration,
}

/// A chat participant registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatParticipant {
    /// Participant id, referenced by `onChatParticipant:<id>`.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Keep the participant selected for follow-up messages.
    pub is_sticky: bool,
}

/// A command palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Namespaced command id (e.g., "smart.showCosts").
    pub command: String,
    pub title: String,
    pub category: String,
}

impl Command {
    pub fn new(
        command: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            title: title.into(),
            category: category.into(),
        }
    }
}

/// The settings page contributed by the extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub title: String,
    /// Setting key to schema, in declaration order.
    pub properties: OrderedMap<ConfigProperty>,
}

/// JSON schema type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Boolean,
    String,
    Number,
    Integer,
    Array,
    Object,
    Null,
}

impl PropertyType {
    /// Whether `value` is an instance of this type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Boolean => value.is_boolean(),
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
            Self::Null => value.is_null(),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// Where a setting may be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingScope {
    Application,
    Machine,
    MachineOverridable,
    Window,
    Resource,
    LanguageOverridable,
}

/// Schema of a single setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigProperty {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub default: Value,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<SettingScope>,
    /// Allowed values, when the setting is a closed choice.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,
}

impl ConfigProperty {
    pub fn new(
        kind: PropertyType,
        default: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            default: default.into(),
            description: description.into(),
            scope: None,
            allowed: None,
        }
    }

    pub fn boolean(default: bool, description: impl Into<String>) -> Self {
        Self::new(PropertyType::Boolean, default, description)
    }

    pub fn string(default: &str, description: impl Into<String>) -> Self {
        Self::new(PropertyType::String, default, description)
    }

    /// Numeric setting. Fails for NaN and infinities, which JSON cannot hold.
    pub fn number(default: f64, description: impl Into<String>) -> Result<Self> {
        let number = serde_json::Number::from_f64(default).ok_or_else(|| {
            Error::SerializationFailure(serde::ser::Error::custom(format!(
                "non-finite number {default} cannot be written as JSON"
            )))
        })?;
        Ok(Self::new(PropertyType::Number, number, description))
    }

    pub fn with_scope(mut self, scope: SettingScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Restrict the setting to a fixed set of string choices.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(choices.into_iter().map(|c| Value::String(c.into())).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_omits_absent_scope_and_enum() {
        let prop = ConfigProperty::boolean(true, "Enable Smart Router extension");
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "boolean",
                "default": true,
                "description": "Enable Smart Router extension"
            })
        );
    }

    #[test]
    fn test_property_scope_is_kebab_case() {
        let prop = ConfigProperty::string("", "key").with_scope(SettingScope::MachineOverridable);
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["scope"], "machine-overridable");
    }

    #[test]
    fn test_number_default_keeps_fraction() {
        let prop = ConfigProperty::number(5.0, "Daily cost warning threshold").unwrap();
        let text = serde_json::to_string(&prop).unwrap();
        assert!(text.contains(r#""default":5.0"#), "got {text}");
    }

    #[test]
    fn test_non_finite_number_is_serialization_failure() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ConfigProperty::number(value, "Monthly budget limit").unwrap_err();
            assert!(matches!(err, Error::SerializationFailure(_)));
            assert!(err.to_string().starts_with("serialization failure: non-finite number"));
        }
    }

    #[test]
    fn test_integer_accepts_only_whole_numbers() {
        assert!(PropertyType::Integer.accepts(&json!(3)));
        assert!(!PropertyType::Integer.accepts(&json!(3.5)));
        assert!(PropertyType::Number.accepts(&json!(3)));
    }
}
