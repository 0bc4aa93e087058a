//! End-to-end flow: a host session with a game exposing the
//! mod-requirements capability, the plugin registry gating activation, and
//! the diagnostic adapter answering the host's listing and detail queries.

use modreq::diagnose::api::RequirementDiagnostic;
use modreq::host::api::{
    DiagnosePlugin, FeatureCapability, FeatureSet, Game, GameFeature, Organizer, PluginRegistry,
};
use modreq::requirement::api::{ModRequirement, RequirementModFiles, WithModRequirements};
use std::collections::HashMap;
use std::sync::Arc;

struct ScriptExtenderRequirement;

impl ModRequirement for ScriptExtenderRequirement {
    fn name(&self) -> &str {
        "Script Extender"
    }

    fn problem_description(&self, _organizer: &dyn Organizer) -> String {
        "<p>The script extender is not installed.</p>".to_string()
    }
}

struct StaticProvider;

impl WithModRequirements for StaticProvider {
    fn mods_with_missing_requirements(
        &self,
        _organizer: &dyn Organizer,
    ) -> Vec<RequirementModFiles> {
        let mut mod_file_map = HashMap::new();
        mod_file_map.insert("Zmod".to_string(), vec!["z.esp".to_string()]);
        mod_file_map.insert(
            "Amod".to_string(),
            vec!["a1.esp".to_string(), "a2.esp".to_string()],
        );
        vec![RequirementModFiles {
            requirement: Arc::new(ScriptExtenderRequirement),
            mod_file_map,
        }]
    }
}

struct RequirementsFeature;

impl GameFeature for RequirementsFeature {
    fn as_mod_requirements(&self) -> Option<&dyn WithModRequirements> {
        static PROVIDER: StaticProvider = StaticProvider;
        Some(&PROVIDER)
    }
}

struct HostGame {
    features: FeatureSet,
}

impl HostGame {
    fn with_requirements() -> Self {
        let mut features = FeatureSet::new();
        features.register(
            FeatureCapability::ModRequirements,
            Box::new(RequirementsFeature),
        );
        Self { features }
    }

    fn bare() -> Self {
        Self {
            features: FeatureSet::new(),
        }
    }
}

impl Game for HostGame {
    fn name(&self) -> &str {
        "HostGame"
    }

    fn features(&self) -> &FeatureSet {
        &self.features
    }
}

struct HostOrganizer {
    game: HostGame,
}

impl Organizer for HostOrganizer {
    fn managed_game(&self) -> Option<&dyn Game> {
        Some(&self.game)
    }
}

#[test]
fn diagnostic_plugin_reports_problems_through_the_registry() {
    let organizer = Arc::new(HostOrganizer {
        game: HostGame::with_requirements(),
    });

    let mut registry = PluginRegistry::new();
    registry
        .register(Box::new(RequirementDiagnostic::new()))
        .unwrap();
    registry.initialize(organizer).unwrap();

    assert_eq!(registry.enabled(), vec!["Mod Requirement Checker"]);

    let plugin = registry.get_mut("Mod Requirement Checker").unwrap();
    let problems = plugin.active_problems();
    assert_eq!(problems, vec![0]);

    assert_eq!(
        plugin.short_description(0),
        "Missing mod requirement: Script Extender"
    );

    let html = plugin.full_description(0);
    assert!(html.contains("<p>Requirement: Script Extender</p>"));
    // Paragraph-prefixed description gets the outer wrap
    assert!(html.contains("<p><p>The script extender is not installed.</p></p>"));
    // Mods sorted ascending, files joined with <br> in input order
    let amod = html.find("<td>Amod</td>").unwrap();
    let zmod = html.find("<td>Zmod</td>").unwrap();
    assert!(amod < zmod);
    assert!(html.contains("<td>a1.esp<br>a2.esp</td>"));
    assert!(html.contains("<tr class=\"even\"><td>Zmod</td>"));

    assert!(!plugin.has_guided_fix(0));
    plugin.start_guided_fix(0);
}

#[test]
fn plugin_stays_disabled_without_a_capability_provider() {
    let organizer = Arc::new(HostOrganizer {
        game: HostGame::bare(),
    });

    let mut registry = PluginRegistry::new();
    registry
        .register(Box::new(RequirementDiagnostic::new()))
        .unwrap();
    registry.initialize(organizer).unwrap();

    assert!(registry.enabled().is_empty());
    assert!(!registry.is_enabled("Mod Requirement Checker"));
}
