//! Climate device — a thermostat tracking current and desired temperature.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::{AttributeValue, Device, DeviceKind, attr, common_attribute, validate_common};
use crate::error::SmartHomeError;

/// A thermostat. Temperatures are unit-agnostic degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClimateDeviceFields")]
pub struct ClimateDevice {
    name: String,
    energy_consumption: f64,
    current_temperature: f64,
    desired_temperature: f64,
}

impl ClimateDevice {
    /// Create a builder for constructing a [`ClimateDevice`].
    #[must_use]
    pub fn builder() -> ClimateDeviceBuilder {
        ClimateDeviceBuilder::default()
    }

    #[must_use]
    pub fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    #[must_use]
    pub fn desired_temperature(&self) -> f64 {
        self.desired_temperature
    }
}

impl Device for ClimateDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn energy_consumption(&self) -> f64 {
        self.energy_consumption
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::ClimateDevice
    }

    fn turn_on(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} thermostat is on, set to {}\u{b0}C.",
            self.name, self.desired_temperature
        )
    }

    fn turn_off(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} thermostat is off.", self.name)
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            attr::CURRENT_TEMPERATURE => Some(AttributeValue::Float(self.current_temperature)),
            attr::DESIRED_TEMPERATURE => Some(AttributeValue::Float(self.desired_temperature)),
            _ => common_attribute(self, name),
        }
    }
}

/// Serialized shape of a [`ClimateDevice`]; deserialization goes through the builder.
#[derive(Deserialize)]
struct ClimateDeviceFields {
    name: String,
    energy_consumption: f64,
    current_temperature: f64,
    desired_temperature: f64,
}

impl TryFrom<ClimateDeviceFields> for ClimateDevice {
    type Error = SmartHomeError;

    fn try_from(fields: ClimateDeviceFields) -> Result<Self, Self::Error> {
        Self::builder()
            .name(fields.name)
            .energy_consumption(fields.energy_consumption)
            .current_temperature(fields.current_temperature)
            .desired_temperature(fields.desired_temperature)
            .build()
    }
}

/// Step-by-step builder for [`ClimateDevice`].
#[derive(Debug, Default)]
pub struct ClimateDeviceBuilder {
    name: Option<String>,
    energy_consumption: f64,
    current_temperature: f64,
    desired_temperature: f64,
}

impl ClimateDeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn energy_consumption(mut self, watts: f64) -> Self {
        self.energy_consumption = watts;
        self
    }

    #[must_use]
    pub fn current_temperature(mut self, degrees: f64) -> Self {
        self.current_temperature = degrees;
        self
    }

    #[must_use]
    pub fn desired_temperature(mut self, degrees: f64) -> Self {
        self.desired_temperature = degrees;
        self
    }

    /// Consume the builder, validate, and return a [`ClimateDevice`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if `name` is missing or empty,
    /// or if the energy consumption is negative or not finite.
    pub fn build(self) -> Result<ClimateDevice, SmartHomeError> {
        let device = ClimateDevice {
            name: self.name.unwrap_or_default(),
            energy_consumption: self.energy_consumption,
            current_temperature: self.current_temperature,
            desired_temperature: self.desired_temperature,
        };
        validate_common(&device.name, device.energy_consumption)?;
        Ok(device)
    }
}
