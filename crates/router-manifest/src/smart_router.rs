//! The Smart Router extension manifest.
//!
//! Every value here is a literal. Editing this file is how the published
//! `package.json` changes; the golden fixture under `tests/fixtures` pins the
//! exact bytes.

use crate::error::Result;
use crate::model::{
    ChatParticipant, Command, ConfigProperty, Configuration, Contributes, Engines,
    ExtensionManifest, SettingScope,
};
use crate::ordered::OrderedMap;

/// Command palette category shared by every contributed command.
pub const COMMAND_CATEGORY: &str = "Smart Router";

/// Namespace of contributed command ids.
pub const COMMAND_NAMESPACE: &str = "smart";

/// Prefix of every contributed setting key.
pub const SETTINGS_PREFIX: &str = "smartRouter";

/// Id of the chat participant.
pub const PARTICIPANT_ID: &str = "smart";

/// Build the Smart Router manifest.
///
/// Fails with [`Error::SerializationFailure`](crate::Error::SerializationFailure)
/// if a literal cannot be represented as JSON.
pub fn smart_router_manifest() -> Result<ExtensionManifest> {
    Ok(ExtensionManifest {
        name: "smart-router".into(),
        display_name: "Smart Router".into(),
        description: "Automatic AI model routing based on intent classification for VS Code".into(),
        version: "0.2.0".into(),
        engines: Engines {
            vscode: "^1.74.0".into(),
        },
        categories: vec!["Other".into(), "Machine Learning".into(), "Snippets".into()],
        activation_events: vec![format!("onChatParticipant:{PARTICIPANT_ID}")],
        main: "./out/extension.js".into(),
        contributes: Contributes {
            chat_participants: vec![ChatParticipant {
                id: PARTICIPANT_ID.into(),
                name: "Smart Router".into(),
                description: "AI model routing based on intent classification".into(),
                is_sticky: true,
            }],
            commands: commands(),
            configuration: Configuration {
                title: "Smart Router".into(),
                properties: settings()?,
            },
        },
        scripts: strings([
            ("vscode:prepublish", "npm run compile"),
            ("compile", "tsc -p ./"),
            ("watch", "tsc -watch -p ./"),
        ]),
        dev_dependencies: strings([
            ("@types/vscode", "^1.74.0"),
            ("@types/node", "16.x"),
            ("typescript", "^4.9.4"),
        ]),
        dependencies: strings([("axios", "^1.6.0")]),
    })
}

fn commands() -> Vec<Command> {
    [
        ("showCosts", "Show Model Costs"),
        ("showStatus", "Show Status"),
        ("clearPreferences", "Clear Preferences"),
        ("openSettings", "Open Settings"),
        ("explainRouting", "Explain Routing Logic"),
        ("startArena", "Start Arena Mode"),
        ("showChineseModels", "Show Chinese Models"),
        ("showContextCache", "Show Context Cache"),
        ("clearContextCache", "Clear Context Cache"),
    ]
    .into_iter()
    .map(|(id, title)| Command::new(format!("{COMMAND_NAMESPACE}.{id}"), title, COMMAND_CATEGORY))
    .collect()
}

fn settings() -> Result<OrderedMap<ConfigProperty>> {
    let settings = [
        ("enabled", ConfigProperty::boolean(true, "Enable Smart Router extension")),
        (
            "openrouterApiKey",
            ConfigProperty::string("", "OpenRouter API key").with_scope(SettingScope::Application),
        ),
        (
            "defaultModel",
            ConfigProperty::string("auto", "Default model to use")
                .with_choices(["auto", "free", "budget", "premium"]),
        ),
        ("costWarningThreshold", ConfigProperty::number(5.0, "Daily cost warning threshold")?),
        ("monthlyBudget", ConfigProperty::number(50.0, "Monthly budget limit")?),
        ("budgetAlerts", ConfigProperty::boolean(true, "Enable budget alerts")),
        ("localClassifier", ConfigProperty::string("ollama:qwen3:8b", "Local classifier model")),
        ("arenaMode", ConfigProperty::boolean(false, "Enable Arena Mode (v2.0 feature)")),
        (
            "battleGroup",
            ConfigProperty::string("hybrid", "Default battle group for Arena Mode")
                .with_choices(["frontier", "fast", "hybrid"]),
        ),
        (
            "chineseModels",
            ConfigProperty::boolean(true, "Enable Chinese AI models (v2.0 feature)"),
        ),
        (
            "contextCache",
            ConfigProperty::boolean(true, "Enable context caching (v2.0 feature)"),
        ),
        (
            "predictiveCost",
            ConfigProperty::boolean(false, "Enable predictive cost engine (v2.0 feature)"),
        ),
    ];

    Ok(settings
        .into_iter()
        .map(|(key, prop)| (format!("{SETTINGS_PREFIX}.{key}"), prop))
        .collect())
}

fn strings<const N: usize>(pairs: [(&str, &str); N]) -> OrderedMap<String> {
    pairs.into_iter().map(|(k, v)| (k, v.to_string())).collect()
}
