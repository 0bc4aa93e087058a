//! Host Trait System
//!
//! Core traits tying plugins to the host: the session context
//! ([`Organizer`]), the active game definition ([`Game`]), and the plugin
//! contracts ([`Plugin`], [`DiagnosePlugin`]).
//!
//! The host calls into plugins on its own thread and blocks on the return
//! value; nothing here suspends or performs I/O. Diagnostic problem keys
//! are positional in the most recently fetched listing and carry no
//! identity across listings.

use crate::host::error::PluginResult;
use crate::host::features::FeatureSet;
use crate::host::types::{PluginInfo, PluginRequirement, PluginSetting};
use crate::requirement::api::WithModRequirements;
use std::sync::Arc;

/// Session context handed to plugins by the host.
///
/// Gives access to the currently managed game; everything else the host
/// knows (mod list, virtual file tree, profiles) stays behind this handle.
pub trait Organizer: Send + Sync {
    /// The active game definition, if any game is currently managed
    fn managed_game(&self) -> Option<&dyn Game>;
}

/// The active game definition.
///
/// A game may implement a capability contract directly or attach it as a
/// feature; `as_mod_requirements` covers the direct case without runtime
/// type inspection.
pub trait Game: Send + Sync {
    /// Display name of the game
    fn name(&self) -> &str;

    /// Capability features attached to this game
    fn features(&self) -> &FeatureSet;

    /// Direct implementation of the mod-requirements capability, if any
    fn as_mod_requirements(&self) -> Option<&dyn WithModRequirements> {
        None
    }
}

/// Base plugin trait all plugins implement
pub trait Plugin: Send + Sync {
    /// Get plugin metadata
    fn info(&self) -> PluginInfo;

    /// Translated display name; defaults to the plain name
    fn localized_name(&self) -> String {
        self.info().name
    }

    /// Bind the plugin to the host session. Called once before any other
    /// method, after the activation requirements have passed.
    fn init(&mut self, organizer: Arc<dyn Organizer>) -> PluginResult<()>;

    /// User-configurable settings this plugin exposes
    fn settings(&self) -> Vec<PluginSetting> {
        Vec::new()
    }

    /// Activation requirements the host evaluates before enabling
    fn requirements(&self) -> Vec<PluginRequirement> {
        Vec::new()
    }

    /// Check if this plugin is compatible with the given host API version.
    ///
    /// The default returns false to force plugins to state their own
    /// compatibility explicitly.
    fn is_compatible(&self, _host_api_version: u32) -> bool {
        false
    }
}

/// Diagnostic plugin contract: report problems and describe them on demand.
///
/// `active_problems` refreshes the plugin's problem list and returns
/// positional keys into it; the description methods are only meaningful
/// for keys from the most recent listing.
pub trait DiagnosePlugin: Plugin {
    /// Refresh and list current problems as keys `0..N-1`
    fn active_problems(&mut self) -> Vec<usize>;

    /// One-line summary for the problem at `key`
    fn short_description(&self, key: usize) -> String;

    /// HTML detail fragment for the problem at `key`
    fn full_description(&self, key: usize) -> String;

    /// Whether the host should offer an automated fix for `key`
    fn has_guided_fix(&self, key: usize) -> bool;

    /// Start the automated fix for `key`
    fn start_guided_fix(&mut self, key: usize);
}
