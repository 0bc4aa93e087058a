pub mod core;
pub mod diagnose;
pub mod host;
pub mod requirement;
