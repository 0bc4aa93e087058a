//! Plugin Registry
//!
//! Holds registered diagnostic plugins and gates their activation: a plugin
//! is enabled only when it is API-compatible with the host and every one of
//! its activation requirements passes against the current session.

use crate::host::error::{PluginError, PluginResult};
use crate::host::traits::{DiagnosePlugin, Organizer};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub struct PluginRegistry {
    /// Map of plugin name to plugin instance
    plugins: HashMap<String, Box<dyn DiagnosePlugin>>,

    /// Names of plugins that passed activation and were initialized
    enabled: HashSet<String>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            enabled: HashSet::new(),
        }
    }

    /// Register a plugin. Names must be unique.
    pub fn register(&mut self, plugin: Box<dyn DiagnosePlugin>) -> PluginResult<()> {
        let plugin_name = plugin.info().name;

        if self.plugins.contains_key(&plugin_name) {
            return Err(PluginError::AlreadyRegistered { plugin_name });
        }

        debug!("Registered plugin '{}'", plugin_name);
        self.plugins.insert(plugin_name, plugin);
        Ok(())
    }

    /// Evaluate activation for every registered plugin and initialize the
    /// ones that qualify.
    ///
    /// Incompatible plugins and plugins with failing requirements are left
    /// disabled; a plugin whose `init` fails aborts with a `LoadError`.
    pub fn initialize(&mut self, organizer: Arc<dyn Organizer>) -> PluginResult<()> {
        let host_api = crate::core::version::get_api_version();

        for (name, plugin) in self.plugins.iter_mut() {
            if !plugin.is_compatible(host_api) {
                warn!(
                    "Plugin '{}' is not compatible with host API {}, leaving disabled",
                    name, host_api
                );
                continue;
            }

            let unmet = plugin
                .requirements()
                .iter()
                .find(|req| !req.check(organizer.as_ref()))
                .map(|req| req.description().to_string());
            if let Some(reason) = unmet {
                debug!("Plugin '{}' not enabled: {}", name, reason);
                continue;
            }

            plugin
                .init(Arc::clone(&organizer))
                .map_err(|e| PluginError::LoadError {
                    plugin_name: name.clone(),
                    cause: e.to_string(),
                })?;
            self.enabled.insert(name.clone());
        }

        Ok(())
    }

    /// Names of enabled plugins, sorted for stable iteration
    pub fn enabled(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.enabled.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Get a mutable plugin by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn DiagnosePlugin + 'static)> {
        self.plugins.get_mut(name).map(|p| &mut **p)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
