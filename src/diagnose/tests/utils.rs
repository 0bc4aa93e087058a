//! Shared fakes for the diagnose test modules: a scriptable capability
//! provider and the organizer/game scaffolding around it.

use crate::host::api::{FeatureCapability, FeatureSet, Game, GameFeature, Organizer};
use crate::requirement::api::{ModRequirement, RequirementModFiles, WithModRequirements};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeRequirement {
    name: String,
    description: String,
}

impl ModRequirement for FakeRequirement {
    fn name(&self) -> &str {
        &self.name
    }

    fn problem_description(&self, _organizer: &dyn Organizer) -> String {
        self.description.clone()
    }
}

/// One missing-requirement entry with the given evidence map
pub fn entry(
    name: &str,
    description: &str,
    mods: &[(&str, &[&str])],
) -> RequirementModFiles {
    let mod_file_map: HashMap<String, Vec<String>> = mods
        .iter()
        .map(|(mod_name, files)| {
            (
                mod_name.to_string(),
                files.iter().map(|f| f.to_string()).collect(),
            )
        })
        .collect();
    RequirementModFiles {
        requirement: Arc::new(FakeRequirement {
            name: name.to_string(),
            description: description.to_string(),
        }),
        mod_file_map,
    }
}

/// Scriptable provider: entries can be swapped between listings and each
/// query is counted.
pub struct FakeProvider {
    entries: Mutex<Vec<RequirementModFiles>>,
    queries: AtomicUsize,
}

impl FakeProvider {
    pub fn new(entries: Vec<RequirementModFiles>) -> Arc<Self> {
        Arc::new(Self {
            entries: Mutex::new(entries),
            queries: AtomicUsize::new(0),
        })
    }

    pub fn set(&self, entries: Vec<RequirementModFiles>) {
        *self.entries.lock().unwrap() = entries;
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl WithModRequirements for FakeProvider {
    fn mods_with_missing_requirements(
        &self,
        _organizer: &dyn Organizer,
    ) -> Vec<RequirementModFiles> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().clone()
    }
}

struct ProviderFeature {
    provider: Arc<FakeProvider>,
}

impl GameFeature for ProviderFeature {
    fn as_mod_requirements(&self) -> Option<&dyn WithModRequirements> {
        Some(self.provider.as_ref())
    }
}

pub struct FakeGame {
    features: FeatureSet,
}

impl FakeGame {
    /// Game exposing the provider through a registered feature
    pub fn with_provider(provider: Arc<FakeProvider>) -> Self {
        let mut features = FeatureSet::new();
        features.register(
            FeatureCapability::ModRequirements,
            Box::new(ProviderFeature { provider }),
        );
        Self { features }
    }

    /// Game declaring no capabilities at all
    pub fn bare() -> Self {
        Self {
            features: FeatureSet::new(),
        }
    }
}

impl Game for FakeGame {
    fn name(&self) -> &str {
        "FakeGame"
    }

    fn features(&self) -> &FeatureSet {
        &self.features
    }
}

pub struct FakeOrganizer {
    game: Option<FakeGame>,
}

impl FakeOrganizer {
    pub fn with_game(game: FakeGame) -> Arc<Self> {
        Arc::new(Self { game: Some(game) })
    }

    pub fn without_game() -> Arc<Self> {
        Arc::new(Self { game: None })
    }
}

impl Organizer for FakeOrganizer {
    fn managed_game(&self) -> Option<&dyn Game> {
        self.game.as_ref().map(|g| g as &dyn Game)
    }
}
