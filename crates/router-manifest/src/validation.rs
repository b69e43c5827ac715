//! Invariant checks for extension manifests.
//!
//! Validation collects every violation rather than stopping at the first, so
//! a single run reports everything that needs fixing.

use std::collections::HashSet;
use std::fmt;

use crate::model::{ExtensionManifest, PropertyType};

/// Marketplace categories VS Code accepts.
pub const HOST_CATEGORIES: &[&str] = &[
    "AI",
    "Azure",
    "Chat",
    "Data Science",
    "Debuggers",
    "Education",
    "Extension Packs",
    "Formatters",
    "Keymaps",
    "Language Packs",
    "Linters",
    "Machine Learning",
    "Notebooks",
    "Other",
    "Programming Languages",
    "SCM Providers",
    "Snippets",
    "Testing",
    "Themes",
    "Visualization",
];

const PARTICIPANT_ACTIVATION_PREFIX: &str = "onChatParticipant:";

/// A single broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("version '{version}' is not semver: {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("engine '{engine}' range '{range}' is invalid: {reason}")]
    InvalidEngineRange {
        engine: String,
        range: String,
        reason: String,
    },

    #[error("category '{0}' is not a marketplace category")]
    UnknownCategory(String),

    #[error("chat participants are declared but there are no activation events")]
    MissingActivationEvents,

    #[error("chat participant '{id}' has no 'onChatParticipant:{id}' activation event")]
    MissingParticipantActivation { id: String },

    #[error("chat participant #{index} has an empty {field}")]
    EmptyParticipantField { index: usize, field: &'static str },

    #[error("chat participant id '{0}' is declared more than once")]
    DuplicateParticipant(String),

    #[error("command '{0}' is declared more than once")]
    DuplicateCommand(String),

    #[error("command '{0}' is not namespaced")]
    UnnamespacedCommand(String),

    #[error("setting '{key}' default does not match type {expected}")]
    DefaultTypeMismatch { key: String, expected: PropertyType },

    #[error("setting '{key}' default is not one of its enum values")]
    DefaultNotInEnum { key: String },

    #[error("setting '{key}' default is negative")]
    NegativeDefault { key: String },
}

impl Violation {
    /// Stable machine-readable name of the violation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidVersion { .. } => "invalid_version",
            Self::InvalidEngineRange { .. } => "invalid_engine_range",
            Self::UnknownCategory(_) => "unknown_category",
            Self::MissingActivationEvents => "missing_activation_events",
            Self::MissingParticipantActivation { .. } => "missing_participant_activation",
            Self::EmptyParticipantField { .. } => "empty_participant_field",
            Self::DuplicateParticipant(_) => "duplicate_participant",
            Self::DuplicateCommand(_) => "duplicate_command",
            Self::UnnamespacedCommand(_) => "unnamespaced_command",
            Self::DefaultTypeMismatch { .. } => "default_type_mismatch",
            Self::DefaultNotInEnum { .. } => "default_not_in_enum",
            Self::NegativeDefault { .. } => "negative_default",
        }
    }
}

/// Outcome of validating a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str("no violations");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

/// Check every manifest invariant.
pub fn validate(manifest: &ExtensionManifest) -> Report {
    let mut report = Report::default();

    check_identity(manifest, &mut report);
    check_participants(manifest, &mut report);
    check_commands(manifest, &mut report);
    check_settings(manifest, &mut report);

    tracing::debug!(violations = report.violations.len(), "Validated manifest");
    report
}

fn check_identity(manifest: &ExtensionManifest, report: &mut Report) {
    if let Err(e) = semver::Version::parse(&manifest.version) {
        report.push(Violation::InvalidVersion {
            version: manifest.version.clone(),
            reason: e.to_string(),
        });
    }

    if let Err(e) = semver::VersionReq::parse(&manifest.engines.vscode) {
        report.push(Violation::InvalidEngineRange {
            engine: "vscode".into(),
            range: manifest.engines.vscode.clone(),
            reason: e.to_string(),
        });
    }

    for category in &manifest.categories {
        if !HOST_CATEGORIES.contains(&category.as_str()) {
            report.push(Violation::UnknownCategory(category.clone()));
        }
    }
}

fn check_participants(manifest: &ExtensionManifest, report: &mut Report) {
    let participants = &manifest.contributes.chat_participants;
    if participants.is_empty() {
        return;
    }

    if manifest.activation_events.is_empty() {
        report.push(Violation::MissingActivationEvents);
    }

    let mut seen = HashSet::new();
    for (index, participant) in participants.iter().enumerate() {
        if participant.id.trim().is_empty() {
            report.push(Violation::EmptyParticipantField { index, field: "id" });
            continue;
        }
        if participant.name.trim().is_empty() {
            report.push(Violation::EmptyParticipantField { index, field: "name" });
        }
        if !seen.insert(participant.id.as_str()) {
            report.push(Violation::DuplicateParticipant(participant.id.clone()));
            continue;
        }

        let event = format!("{PARTICIPANT_ACTIVATION_PREFIX}{}", participant.id);
        if !manifest.activation_events.is_empty() && !manifest.activation_events.contains(&event) {
            report.push(Violation::MissingParticipantActivation {
                id: participant.id.clone(),
            });
        }
    }
}

fn check_commands(manifest: &ExtensionManifest, report: &mut Report) {
    let mut seen = HashSet::new();
    for command in &manifest.contributes.commands {
        let id = command.command.as_str();
        if !seen.insert(id) {
            report.push(Violation::DuplicateCommand(id.to_string()));
        }
        if !is_namespaced(id) {
            report.push(Violation::UnnamespacedCommand(id.to_string()));
        }
    }
}

/// `<namespace>.<name>` with both parts non-empty.
fn is_namespaced(id: &str) -> bool {
    matches!(id.split_once('.'), Some((ns, name)) if !ns.is_empty() && !name.is_empty())
}

fn check_settings(manifest: &ExtensionManifest, report: &mut Report) {
    for (key, prop) in manifest.contributes.configuration.properties.iter() {
        if !prop.kind.accepts(&prop.default) {
            report.push(Violation::DefaultTypeMismatch {
                key: key.to_string(),
                expected: prop.kind,
            });
            continue;
        }

        if let Some(allowed) = &prop.allowed
            && !allowed.contains(&prop.default)
        {
            report.push(Violation::DefaultNotInEnum { key: key.to_string() });
        }

        if prop.kind.is_numeric() && prop.default.as_f64().is_some_and(|n| n < 0.0) {
            report.push(Violation::NegativeDefault { key: key.to_string() });
        }
    }
}
