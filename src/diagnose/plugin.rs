//! The requirement diagnostic adapter
//!
//! Implements the host's diagnose contract on top of whatever
//! [`WithModRequirements`] provider the active game exposes. Problems are
//! keyed by position in the snapshot taken at the last listing; every
//! listing call performs exactly one provider query and overwrites the
//! snapshot, even when the result is empty.

use crate::diagnose::render;
use crate::diagnose::snapshot::ProblemSnapshot;
use crate::host::api::{
    Catalog, DiagnosePlugin, Organizer, Plugin, PluginInfo, PluginRequirement, PluginResult,
    PluginSetting,
};
use crate::requirement::api::find_mod_requirements;
use log::debug;
use std::sync::Arc;

const PLUGIN_NAME: &str = "Mod Requirement Checker";
const PLUGIN_AUTHOR: &str = "modreq";
const PLUGIN_VERSION: &str = "0.1.0";
const PLUGIN_DESCRIPTION: &str = "Checks mod files for missing requirements.";
const ACTIVATION_DESCRIPTION: &str =
    "This plugin can only be enabled for games reporting mod requirements, \
     either directly or through a feature.";

pub struct RequirementDiagnostic {
    organizer: Option<Arc<dyn Organizer>>,
    catalog: Catalog,
    snapshot: ProblemSnapshot,
}

impl RequirementDiagnostic {
    /// Adapter with built-in English strings
    pub fn new() -> Self {
        Self::with_catalog(Catalog::new())
    }

    /// Adapter with an injected localization catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            organizer: None,
            catalog,
            snapshot: ProblemSnapshot::new(),
        }
    }
}

impl Default for RequirementDiagnostic {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RequirementDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequirementDiagnostic")
            .field("initialized", &self.organizer.is_some())
            .field("problems", &self.snapshot.len())
            .finish()
    }
}

impl Plugin for RequirementDiagnostic {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.to_string(),
            version: PLUGIN_VERSION.to_string(),
            description: self
                .catalog
                .text("plugin.description", PLUGIN_DESCRIPTION)
                .to_string(),
            author: PLUGIN_AUTHOR.to_string(),
            api_version: crate::core::version::get_api_version(),
        }
    }

    fn localized_name(&self) -> String {
        self.catalog.text("plugin.name", PLUGIN_NAME).to_string()
    }

    fn init(&mut self, organizer: Arc<dyn Organizer>) -> PluginResult<()> {
        self.organizer = Some(organizer);
        Ok(())
    }

    fn settings(&self) -> Vec<PluginSetting> {
        Vec::new()
    }

    fn requirements(&self) -> Vec<PluginRequirement> {
        let description = self
            .catalog
            .text("plugin.activation", ACTIVATION_DESCRIPTION)
            .to_string();
        vec![PluginRequirement::basic(description, |organizer| {
            find_mod_requirements(organizer).is_some()
        })]
    }

    fn is_compatible(&self, host_api_version: u32) -> bool {
        host_api_version >= crate::core::version::get_api_version()
    }
}

impl DiagnosePlugin for RequirementDiagnostic {
    fn active_problems(&mut self) -> Vec<usize> {
        let Some(organizer) = self.organizer.clone() else {
            self.snapshot.replace(Vec::new());
            return Vec::new();
        };

        let entries = match find_mod_requirements(organizer.as_ref()) {
            Some(provider) => provider.mods_with_missing_requirements(organizer.as_ref()),
            None => Vec::new(),
        };
        debug!("Refreshed problem snapshot: {} missing requirements", entries.len());
        self.snapshot.replace(entries);
        self.snapshot.keys()
    }

    fn short_description(&self, key: usize) -> String {
        self.snapshot
            .get(key)
            .map(|entry| {
                self.catalog.format(
                    "diagnose.short",
                    "Missing mod requirement: {0}",
                    entry.requirement.name(),
                )
            })
            .unwrap_or_default()
    }

    fn full_description(&self, key: usize) -> String {
        let Some(organizer) = &self.organizer else {
            return String::new();
        };
        let Some(entry) = self.snapshot.get(key) else {
            return String::new();
        };

        let description = render::wrap_leading_paragraph(
            &entry.requirement.problem_description(organizer.as_ref()),
        );

        let mut pairs: Vec<(&String, &Vec<String>)> = entry.mod_file_map.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        render::problem_fragment(
            &self.catalog,
            entry.requirement.name(),
            &description,
            &pairs,
        )
    }

    fn has_guided_fix(&self, _key: usize) -> bool {
        false
    }

    fn start_guided_fix(&mut self, _key: usize) {}
}
