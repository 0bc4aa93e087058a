//! Test modules for the diagnostic adapter

mod utils;
