//! # smarthome-adapter-sample
//!
//! Fixed sample devices for the demo report.
//!
//! ## Provided devices
//!
//! | Field | Kind | Name | Energy | Extra |
//! |-------|------|------|--------|-------|
//! | `light1` | lighting | Smart Light 1 | 15 W | brightness 80, White |
//! | `light2` | lighting | Smart Light 2 | 10 W | brightness 50, Blue |
//! | `thermostat1` | climate | Thermo 1 | 30 W | 22 → 25 |
//! | `thermostat2` | climate | Thermo 2 | 40 W | 18 → 22 |
//!
//! ## Dependency rule
//!
//! Depends on `smarthome-domain` only.

use std::rc::Rc;

use smarthome_domain::collection::DeviceCollection;
use smarthome_domain::device::{ClimateDevice, Device, LightingDevice};
use smarthome_domain::error::SmartHomeError;

/// The sample devices and the home that holds them.
///
/// The home shares each device with the named fields.
pub struct SampleHome {
    pub light1: Rc<dyn Device>,
    pub light2: Rc<dyn Device>,
    pub thermostat1: Rc<dyn Device>,
    pub thermostat2: Rc<dyn Device>,
    home: DeviceCollection,
}

impl SampleHome {
    /// Build the four sample devices and add them to a fresh home in the
    /// order light1, light2, thermostat1, thermostat2.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a builder fails (should not happen
    /// with hardcoded inputs).
    pub fn build() -> Result<Self, SmartHomeError> {
        let light1: Rc<dyn Device> = Rc::new(light("Smart Light 1", 15.0, 80, "White")?);
        let light2: Rc<dyn Device> = Rc::new(light("Smart Light 2", 10.0, 50, "Blue")?);
        let thermostat1: Rc<dyn Device> = Rc::new(thermostat("Thermo 1", 30.0, 22.0, 25.0)?);
        let thermostat2: Rc<dyn Device> = Rc::new(thermostat("Thermo 2", 40.0, 18.0, 22.0)?);

        let mut home = DeviceCollection::new();
        home.add(Rc::clone(&light1));
        home.add(Rc::clone(&light2));
        home.add(Rc::clone(&thermostat1));
        home.add(Rc::clone(&thermostat2));
        tracing::debug!(devices = home.len(), "sample home built");

        Ok(Self {
            light1,
            light2,
            thermostat1,
            thermostat2,
            home,
        })
    }

    #[must_use]
    pub fn home(&self) -> &DeviceCollection {
        &self.home
    }

    /// Devices shown in the introspection section: the first light and the
    /// first thermostat.
    #[must_use]
    pub fn introspection_targets(&self) -> [Rc<dyn Device>; 2] {
        [Rc::clone(&self.light1), Rc::clone(&self.thermostat1)]
    }
}

fn light(
    name: &str,
    watts: f64,
    brightness: i32,
    color: &str,
) -> Result<LightingDevice, SmartHomeError> {
    LightingDevice::builder()
        .name(name)
        .energy_consumption(watts)
        .brightness(brightness)
        .color(color)
        .build()
}

fn thermostat(
    name: &str,
    watts: f64,
    current: f64,
    desired: f64,
) -> Result<ClimateDevice, SmartHomeError> {
    ClimateDevice::builder()
        .name(name)
        .energy_consumption(watts)
        .current_temperature(current)
        .desired_temperature(desired)
        .build()
}
