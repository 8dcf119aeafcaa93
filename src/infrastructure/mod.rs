//! Infrastructure layer.
//!
//! Configuration loading and the composition root that wires venues into the
//! command router.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
