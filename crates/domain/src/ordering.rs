//! Ordering policies — stateless comparisons used to sort device snapshots.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::device::Device;

/// Compare by energy consumption, lowest first.
///
/// Uses [`f64::total_cmp`], so the order is total even for values the
/// builders would have rejected.
#[must_use]
pub fn by_energy_consumption(a: &dyn Device, b: &dyn Device) -> Ordering {
    a.energy_consumption().total_cmp(&b.energy_consumption())
}

/// Compare by name, ordinal string order.
#[must_use]
pub fn by_name(a: &dyn Device, b: &dyn Device) -> Ordering {
    a.name().cmp(b.name())
}

/// Named sort policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceOrdering {
    EnergyConsumption,
    Name,
}

impl DeviceOrdering {
    /// Apply the policy to two devices.
    #[must_use]
    pub fn compare(self, a: &dyn Device, b: &dyn Device) -> Ordering {
        match self {
            Self::EnergyConsumption => by_energy_consumption(a, b),
            Self::Name => by_name(a, b),
        }
    }
}

impl fmt::Display for DeviceOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnergyConsumption => f.write_str("energy_consumption"),
            Self::Name => f.write_str("name"),
        }
    }
}
