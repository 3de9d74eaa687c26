//! Simulation support.

/// Raw firmware image loading.
pub mod loader;
