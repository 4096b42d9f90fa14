//! Domain models for plugin-detect
//!
//! This module contains the values produced by detection. They are plain data:
//! no I/O, no logging.

pub mod decision;

pub use decision::{AnomalyKind, InstallationDecision, Resolution, SkipReason};
