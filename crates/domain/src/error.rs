//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SmartHomeError`] via `#[from]`.

use crate::device::DeviceKind;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    /// A domain invariant was violated while building a value.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Device metadata and device state disagree.
    #[error("introspection error")]
    Introspection(#[from] IntrospectionError),
}

/// Invariant violations detected by the device builders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The device name is missing or empty.
    #[error("name must not be empty")]
    EmptyName,

    /// Energy consumption must be a finite, non-negative number of watts.
    #[error("energy consumption must be finite and non-negative, got {0}")]
    InvalidEnergyConsumption(f64),
}

/// Raised when a kind descriptor names an attribute the device cannot read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntrospectionError {
    #[error("{kind} does not expose attribute {attribute}")]
    MissingAttribute {
        kind: DeviceKind,
        attribute: &'static str,
    },
}
