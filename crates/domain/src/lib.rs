//! # smarthome-domain
//!
//! Pure domain model for the smarthome system.
//!
//! ## Responsibilities
//! - Define **Devices** (lighting and climate appliances) behind the [`device::Device`] trait
//! - Describe each device kind with static metadata used for introspection
//! - Hold devices in an insertion-ordered [`collection::DeviceCollection`]
//! - Provide the ordering policies used to produce sorted views
//! - Contain all invariant enforcement (builders validate on `build()`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or the binary.

pub mod error;

pub mod collection;
pub mod device;
pub mod ordering;
