//! Device — a controllable appliance in the home.
//!
//! Every concrete kind implements the [`Device`] trait. Kinds are described by
//! a static [`TypeDescriptor`] so callers can enumerate a device's attributes
//! and behaviors without knowing which kind they hold.

mod attribute_value;
mod climate;
mod lighting;

pub use attribute_value::AttributeValue;
pub use climate::{ClimateDevice, ClimateDeviceBuilder};
pub use lighting::{LightingDevice, LightingDeviceBuilder};

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::error::ValidationError;

/// Attribute names, as reported by introspection.
pub mod attr {
    pub const NAME: &str = "Name";
    pub const ENERGY_CONSUMPTION: &str = "EnergyConsumption";
    pub const BRIGHTNESS: &str = "Brightness";
    pub const COLOR: &str = "Color";
    pub const CURRENT_TEMPERATURE: &str = "CurrentTemperature";
    pub const DESIRED_TEMPERATURE: &str = "DesiredTemperature";
}

/// Behavior names, as reported by introspection.
pub mod behavior {
    pub const TURN_ON: &str = "TurnOn";
    pub const TURN_OFF: &str = "TurnOff";
}

/// Common capability shared by every device kind.
pub trait Device: fmt::Debug {
    /// Human-readable device name, fixed at construction.
    fn name(&self) -> &str;

    /// Power draw in watts.
    fn energy_consumption(&self) -> f64;

    /// Concrete kind tag.
    fn kind(&self) -> DeviceKind;

    /// Power the device on, writing a status line to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    fn turn_on(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Power the device off, writing a status line to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    fn turn_off(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Read an attribute by its introspection name.
    ///
    /// Returns `None` for names the kind does not declare.
    fn attribute(&self, name: &str) -> Option<AttributeValue>;

    /// Static metadata for this device's kind.
    fn descriptor(&self) -> &'static TypeDescriptor {
        self.kind().descriptor()
    }
}

/// Concrete device kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceKind {
    LightingDevice,
    ClimateDevice,
}

impl DeviceKind {
    /// Every known kind, in declaration order.
    pub const ALL: [Self; 2] = [Self::LightingDevice, Self::ClimateDevice];

    /// Look up the static descriptor registered for this kind.
    #[must_use]
    pub fn descriptor(self) -> &'static TypeDescriptor {
        match self {
            Self::LightingDevice => &LIGHTING_DESCRIPTOR,
            Self::ClimateDevice => &CLIMATE_DESCRIPTOR,
        }
    }

    /// The kind's tag as shown to users.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LightingDevice => "LightingDevice",
            Self::ClimateDevice => "ClimateDevice",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered attribute and behavior names declared by a device kind.
///
/// Attributes list inherited ones first, then the kind's own, each group in
/// declaration order. Behaviors are those the kind itself defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub kind: DeviceKind,
    pub attributes: &'static [&'static str],
    pub behaviors: &'static [&'static str],
}

static LIGHTING_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    kind: DeviceKind::LightingDevice,
    attributes: &[
        attr::NAME,
        attr::ENERGY_CONSUMPTION,
        attr::BRIGHTNESS,
        attr::COLOR,
    ],
    behaviors: &[behavior::TURN_ON, behavior::TURN_OFF],
};

static CLIMATE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    kind: DeviceKind::ClimateDevice,
    attributes: &[
        attr::NAME,
        attr::ENERGY_CONSUMPTION,
        attr::CURRENT_TEMPERATURE,
        attr::DESIRED_TEMPERATURE,
    ],
    behaviors: &[behavior::TURN_ON, behavior::TURN_OFF],
};

/// Resolve the attributes every kind inherits.
fn common_attribute(device: &dyn Device, name: &str) -> Option<AttributeValue> {
    match name {
        attr::NAME => Some(AttributeValue::from(device.name())),
        attr::ENERGY_CONSUMPTION => Some(AttributeValue::Float(device.energy_consumption())),
        _ => None,
    }
}

fn validate_common(name: &str, energy_consumption: f64) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !energy_consumption.is_finite() || energy_consumption < 0.0 {
        return Err(ValidationError::InvalidEnergyConsumption(
            energy_consumption,
        ));
    }
    Ok(())
}
