//! Type definitions for the host plugin contract
//!
//! Metadata structures the host reads once at registration time: identity,
//! user-visible settings, and activation requirements.

use crate::host::traits::Organizer;

/// Plugin metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub api_version: u32,
}

/// A user-configurable plugin setting the host persists and edits
#[derive(Debug, Clone, PartialEq)]
pub struct PluginSetting {
    pub key: String,
    pub description: String,
    pub default: SettingValue,
}

/// Value of a plugin setting
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// An activation requirement evaluated by the host before enabling a plugin.
///
/// The check runs once against the current session; a failing check leaves
/// the plugin registered but disabled, with the description surfaced to the
/// user as the reason.
pub struct PluginRequirement {
    description: String,
    check: Box<dyn Fn(&dyn Organizer) -> bool + Send + Sync>,
}

impl PluginRequirement {
    /// Requirement backed by a plain predicate over the session context
    pub fn basic(
        description: impl Into<String>,
        check: impl Fn(&dyn Organizer) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            check: Box::new(check),
        }
    }

    pub fn check(&self, organizer: &dyn Organizer) -> bool {
        (self.check)(organizer)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for PluginRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRequirement")
            .field("description", &self.description)
            .finish()
    }
}
