//! Public API for the host contract
//!
//! External code should import from here rather than directly from the
//! internal modules.

pub use crate::host::error::{PluginError, PluginResult};
pub use crate::host::features::{CapabilitySet, FeatureCapability, FeatureSet, GameFeature};
pub use crate::host::locale::Catalog;
pub use crate::host::registry::PluginRegistry;
pub use crate::host::traits::{DiagnosePlugin, Game, Organizer, Plugin};
pub use crate::host::types::{PluginInfo, PluginRequirement, PluginSetting, SettingValue};
