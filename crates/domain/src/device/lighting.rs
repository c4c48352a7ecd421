//! Lighting device — a dimmable, colored light.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::{AttributeValue, Device, DeviceKind, attr, common_attribute, validate_common};
use crate::error::SmartHomeError;

/// A light with a brightness level and a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LightingDeviceFields")]
pub struct LightingDevice {
    name: String,
    energy_consumption: f64,
    brightness: i32,
    color: String,
}

impl LightingDevice {
    /// Create a builder for constructing a [`LightingDevice`].
    #[must_use]
    pub fn builder() -> LightingDeviceBuilder {
        LightingDeviceBuilder::default()
    }

    /// Brightness level, expected within `0..=100` but not enforced.
    #[must_use]
    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Device for LightingDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn energy_consumption(&self) -> f64 {
        self.energy_consumption
    }

    fn kind(&self) -> DeviceKind {
        DeviceKind::LightingDevice
    }

    fn turn_on(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} lighting is on.", self.name)
    }

    fn turn_off(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} lighting is off.", self.name)
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            attr::BRIGHTNESS => Some(AttributeValue::from(self.brightness)),
            attr::COLOR => Some(AttributeValue::from(self.color.as_str())),
            _ => common_attribute(self, name),
        }
    }
}

/// Serialized shape of a [`LightingDevice`]; deserialization goes through the builder.
#[derive(Deserialize)]
struct LightingDeviceFields {
    name: String,
    energy_consumption: f64,
    brightness: i32,
    color: String,
}

impl TryFrom<LightingDeviceFields> for LightingDevice {
    type Error = SmartHomeError;

    fn try_from(fields: LightingDeviceFields) -> Result<Self, Self::Error> {
        Self::builder()
            .name(fields.name)
            .energy_consumption(fields.energy_consumption)
            .brightness(fields.brightness)
            .color(fields.color)
            .build()
    }
}

/// Step-by-step builder for [`LightingDevice`].
#[derive(Debug, Default)]
pub struct LightingDeviceBuilder {
    name: Option<String>,
    energy_consumption: f64,
    brightness: i32,
    color: Option<String>,
}

impl LightingDeviceBuilder {
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
    pub fn brightness(mut self, brightness: i32) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Consume the builder, validate, and return a [`LightingDevice`].
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::Validation`] if `name` is missing or empty,
    /// or if the energy consumption is negative or not finite.
    pub fn build(self) -> Result<LightingDevice, SmartHomeError> {
        let device = LightingDevice {
            name: self.name.unwrap_or_default(),
            energy_consumption: self.energy_consumption,
            brightness: self.brightness,
            color: self.color.unwrap_or_default(),
        };
        validate_common(&device.name, device.energy_consumption)?;
        Ok(device)
    }
}
