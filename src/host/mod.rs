//! Host Application Contract
//!
//! Defines the surface a mod-management host exposes to diagnostic plugins:
//! the session context, the active game definition with its feature
//! registry, the plugin traits and metadata types, and the registry that
//! gates plugin activation.

// Internal modules - all access should go through the api module
pub(crate) mod error;
pub(crate) mod features;
pub(crate) mod locale;
pub(crate) mod registry;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for host contracts
pub mod api;
