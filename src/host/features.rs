//! Game Feature Registry
//!
//! Games attach capability objects ("features") that plugins can query.
//! Each feature declares, at registration time, which capabilities it
//! satisfies as an explicit set; lookup is by declared capability, never by
//! runtime type inspection.

use crate::requirement::api::WithModRequirements;

/// Capabilities a game feature can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureCapability {
    /// Can report which managed mods are missing declared requirements
    ModRequirements,
    /// Can validate the layout of installed mod data
    ModDataChecker,
    /// Can extract metadata from save games
    SaveGameInfo,
}

impl FeatureCapability {
    const fn bit(self) -> u8 {
        match self {
            FeatureCapability::ModRequirements => 1 << 0,
            FeatureCapability::ModDataChecker => 1 << 1,
            FeatureCapability::SaveGameInfo => 1 << 2,
        }
    }
}

/// Set of declared capabilities, combinable with `|`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const NONE: CapabilitySet = CapabilitySet(0);

    pub fn contains(&self, capability: FeatureCapability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<FeatureCapability> for CapabilitySet {
    fn from(capability: FeatureCapability) -> Self {
        CapabilitySet(capability.bit())
    }
}

impl std::ops::BitOr<FeatureCapability> for CapabilitySet {
    type Output = CapabilitySet;

    fn bitor(self, rhs: FeatureCapability) -> CapabilitySet {
        CapabilitySet(self.0 | rhs.bit())
    }
}

impl std::ops::BitOr for FeatureCapability {
    type Output = CapabilitySet;

    fn bitor(self, rhs: FeatureCapability) -> CapabilitySet {
        CapabilitySet(self.bit() | rhs.bit())
    }
}

/// A capability object attached to a game.
///
/// Accessors turn a declared capability into its concrete contract; a
/// feature overrides the accessor for every capability it registers.
pub trait GameFeature: Send + Sync {
    fn as_mod_requirements(&self) -> Option<&dyn WithModRequirements> {
        None
    }
}

struct FeatureEntry {
    capabilities: CapabilitySet,
    feature: Box<dyn GameFeature>,
}

/// Unordered registry of features attached to one game
#[derive(Default)]
pub struct FeatureSet {
    entries: Vec<FeatureEntry>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a feature together with the capabilities it satisfies
    pub fn register(
        &mut self,
        capabilities: impl Into<CapabilitySet>,
        feature: Box<dyn GameFeature>,
    ) {
        self.entries.push(FeatureEntry {
            capabilities: capabilities.into(),
            feature,
        });
    }

    /// First registered feature declaring `capability`
    pub fn find(&self, capability: FeatureCapability) -> Option<&dyn GameFeature> {
        self.entries
            .iter()
            .find(|entry| entry.capabilities.contains(capability))
            .map(|entry| entry.feature.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureSet")
            .field("len", &self.entries.len())
            .finish()
    }
}
