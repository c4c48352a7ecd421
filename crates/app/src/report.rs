//! Console report — the inventory, sorted views, and introspection blocks.
//!
//! All output goes to a caller-supplied [`Write`] sink so the binary can
//! target stdout and tests can target a buffer.

use std::io::Write;
use std::rc::Rc;

use smarthome_domain::collection::DeviceCollection;
use smarthome_domain::device::Device;
use smarthome_domain::ordering::DeviceOrdering;

use crate::error::ReportError;
use crate::introspector::inspect;

/// Renders views of a [`DeviceCollection`].
pub struct HomeReport<'a> {
    home: &'a DeviceCollection,
}

impl<'a> HomeReport<'a> {
    #[must_use]
    pub fn new(home: &'a DeviceCollection) -> Self {
        Self { home }
    }

    /// Write every section in order: inventory, energy-sorted view,
    /// name-sorted view, then introspection of `inspected`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if `out` fails, or
    /// [`ReportError::Domain`] if a device cannot be introspected.
    #[tracing::instrument(skip_all, fields(devices = self.home.len()))]
    pub fn write_all(
        &self,
        out: &mut dyn Write,
        inspected: &[Rc<dyn Device>],
    ) -> Result<(), ReportError> {
        self.write_inventory(out)?;
        self.write_sorted(out, DeviceOrdering::EnergyConsumption)?;
        self.write_sorted(out, DeviceOrdering::Name)?;
        self.write_introspection(out, inspected)?;
        tracing::info!("report written");
        Ok(())
    }

    /// List every device in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if `out` fails.
    pub fn write_inventory(&self, out: &mut dyn Write) -> Result<(), ReportError> {
        writeln!(out, "All devices in the smart home:")?;
        for device in self.home {
            writeln!(
                out,
                "Device: {}, Energy consumption: {}W",
                device.name(),
                device.energy_consumption()
            )?;
        }
        Ok(())
    }

    /// List a snapshot of the devices sorted by `ordering`.
    ///
    /// The collection itself is left in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if `out` fails.
    pub fn write_sorted(
        &self,
        out: &mut dyn Write,
        ordering: DeviceOrdering,
    ) -> Result<(), ReportError> {
        let sorted = self.home.sorted_by(|a, b| ordering.compare(a, b));
        tracing::debug!(%ordering, "collection sorted");

        writeln!(out)?;
        writeln!(out, "{}", sorted_heading(ordering))?;
        for device in &sorted {
            writeln!(
                out,
                "Device: {}, Consumption: {}W",
                device.name(),
                device.energy_consumption()
            )?;
        }
        Ok(())
    }

    /// Describe each of `devices` through the introspector.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if `out` fails, or
    /// [`ReportError::Domain`] if a device cannot be introspected.
    pub fn write_introspection(
        &self,
        out: &mut dyn Write,
        devices: &[Rc<dyn Device>],
    ) -> Result<(), ReportError> {
        writeln!(out)?;
        writeln!(out, "Device information via introspection:")?;
        for device in devices {
            let info = inspect(&**device)?;
            writeln!(out)?;
            write!(out, "{info}")?;
        }
        Ok(())
    }
}

fn sorted_heading(ordering: DeviceOrdering) -> &'static str {
    match ordering {
        DeviceOrdering::EnergyConsumption => "Sorted by energy consumption:",
        DeviceOrdering::Name => "Sorted by name:",
    }
}
