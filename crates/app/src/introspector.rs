//! Introspector — describe a device from its kind descriptor.
//!
//! The caller hands over any `&dyn Device`; the kind tag selects a static
//! [`TypeDescriptor`](smarthome_domain::device::TypeDescriptor) and every
//! listed attribute is read through [`Device::attribute`].

use std::fmt;

use serde::Serialize;
use smarthome_domain::device::{AttributeValue, Device, DeviceKind};
use smarthome_domain::error::{IntrospectionError, SmartHomeError};

/// Public shape of a single device at the time it was inspected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub name: String,
    pub kind: DeviceKind,
    pub attributes: Vec<AttributeEntry>,
    pub behaviors: Vec<&'static str>,
}

/// One attribute name with its current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeEntry {
    pub name: &'static str,
    pub value: AttributeValue,
}

impl DeviceInfo {
    /// Look up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.value)
    }
}

/// Gather the attributes and behaviors declared for `device`'s kind.
///
/// # Errors
///
/// Returns [`SmartHomeError::Introspection`] when the descriptor lists an
/// attribute the device does not expose.
#[tracing::instrument(skip_all, fields(device_name = %device.name(), kind = %device.kind()))]
pub fn inspect(device: &dyn Device) -> Result<DeviceInfo, SmartHomeError> {
    let descriptor = device.descriptor();
    let attributes = descriptor
        .attributes
        .iter()
        .map(|&name| {
            device
                .attribute(name)
                .map(|value| AttributeEntry { name, value })
                .ok_or(IntrospectionError::MissingAttribute {
                    kind: descriptor.kind,
                    attribute: name,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(attributes = attributes.len(), "device inspected");

    Ok(DeviceInfo {
        name: device.name().to_string(),
        kind: descriptor.kind,
        attributes,
        behaviors: descriptor.behaviors.to_vec(),
    })
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Information for device {} ({}):", self.name, self.kind)?;
        writeln!(f, "Public properties:")?;
        for entry in &self.attributes {
            writeln!(f, "- {}: {}", entry.name, entry.value)?;
        }
        writeln!(f, "Public methods:")?;
        for behavior in &self.behaviors {
            writeln!(f, "- {behavior}()")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::*;
    use smarthome_domain::device::{ClimateDevice, LightingDevice};

    fn smart_light() -> LightingDevice {
        LightingDevice::builder()
            .name("Smart Light 1")
            .energy_consumption(15.0)
            .brightness(80)
            .color("White")
            .build()
            .unwrap()
    }

    /// A device whose kind descriptor promises more than it can deliver.
    #[derive(Debug)]
    struct Broken;

    impl Device for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        fn energy_consumption(&self) -> f64 {
            0.0
        }

        fn kind(&self) -> DeviceKind {
            DeviceKind::LightingDevice
        }

        fn turn_on(&self, _out: &mut dyn Write) -> io::Result<()> {
            Ok(())
        }

        fn turn_off(&self, _out: &mut dyn Write) -> io::Result<()> {
            Ok(())
        }

        fn attribute(&self, name: &str) -> Option<AttributeValue> {
            (name == "Name").then(|| AttributeValue::from("Broken"))
        }
    }

    #[test]
    fn should_report_light_attributes_and_behaviors() {
        let info = inspect(&smart_light()).unwrap();
        assert_eq!(info.name, "Smart Light 1");
        assert_eq!(info.kind, DeviceKind::LightingDevice);
        assert_eq!(
            info.attribute("Name"),
            Some(&AttributeValue::String("Smart Light 1".to_string()))
        );
        assert_eq!(
            info.attribute("EnergyConsumption"),
            Some(&AttributeValue::Float(15.0))
        );
        assert_eq!(info.attribute("Brightness"), Some(&AttributeValue::Int(80)));
        assert_eq!(
            info.attribute("Color"),
            Some(&AttributeValue::String("White".to_string()))
        );
        assert!(info.behaviors.contains(&"TurnOn"));
        assert!(info.behaviors.contains(&"TurnOff"));
    }

    #[test]
    fn should_render_light_block() {
        let info = inspect(&smart_light()).unwrap();
        assert_eq!(
            info.to_string(),
            "Information for device Smart Light 1 (LightingDevice):\n\
             Public properties:\n\
             - Name: Smart Light 1\n\
             - EnergyConsumption: 15\n\
             - Brightness: 80\n\
             - Color: White\n\
             Public methods:\n\
             - TurnOn()\n\
             - TurnOff()\n"
        );
    }

    #[test]
    fn should_list_thermostat_attributes_in_declaration_order() {
        let thermostat = ClimateDevice::builder()
            .name("Thermo 1")
            .energy_consumption(30.0)
            .current_temperature(22.0)
            .desired_temperature(25.0)
            .build()
            .unwrap();
        let info = inspect(&thermostat).unwrap();
        let names: Vec<_> = info.attributes.iter().map(|entry| entry.name).collect();
        assert_eq!(
            names,
            [
                "Name",
                "EnergyConsumption",
                "CurrentTemperature",
                "DesiredTemperature"
            ]
        );
        assert_eq!(info.behaviors, ["TurnOn", "TurnOff"]);
    }

    #[test]
    fn should_fail_fast_when_attribute_is_missing() {
        let result = inspect(&Broken);
        assert!(matches!(
            result,
            Err(SmartHomeError::Introspection(
                IntrospectionError::MissingAttribute {
                    kind: DeviceKind::LightingDevice,
                    attribute: "EnergyConsumption",
                }
            ))
        ));
    }

    #[test]
    fn should_serialize_to_json() {
        let info = inspect(&smart_light()).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["kind"], "LightingDevice");
        assert_eq!(json["attributes"][2]["name"], "Brightness");
        assert_eq!(json["attributes"][2]["value"], 80);
        assert_eq!(json["behaviors"][1], "TurnOff");
    }
}
