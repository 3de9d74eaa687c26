//! Common utilities and types used throughout the control unit.
//!
//! This module provides the trap type, host-side error types, memory access
//! classification and shared constants.

/// Common constants.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Trap and error types.
pub mod error;

pub use data::AccessType;
pub use error::{ConfigError, LoaderError, Trap};
