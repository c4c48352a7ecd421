//! # smarthome-app
//!
//! Application layer — use-cases built on the domain model.
//!
//! ## Responsibilities
//! - [`introspector`]: describe any device's attributes and behaviors from its
//!   kind descriptor, without a kind-specific code path
//! - [`report`]: render the console report (inventory, sorted views,
//!   introspection) into any [`std::io::Write`] sink
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only. Never imports adapter crates.

pub mod error;
pub mod introspector;
pub mod report;
