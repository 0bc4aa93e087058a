//! Plugin Error Types

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Plugin '{plugin_name}' is already registered")]
    AlreadyRegistered { plugin_name: String },

    #[error("Plugin not found: {plugin_name}")]
    PluginNotFound { plugin_name: String },

    #[error("Plugin '{plugin_name}' targets API {plugin_api}, host provides {host_api}")]
    VersionIncompatible {
        plugin_name: String,
        plugin_api: u32,
        host_api: u32,
    },

    #[error("Failed to initialize plugin '{plugin_name}': {cause}")]
    LoadError { plugin_name: String, cause: String },
}

/// Result type for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;
