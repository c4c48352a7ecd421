//! Device collection — the insertion-ordered set of devices in a home.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::device::Device;

/// Ordered holder of every device in the home.
///
/// Devices are shared: the collection keeps an [`Rc`] and callers may hold
/// their own. Iteration always follows insertion order; sorting works on a
/// snapshot and never reorders the collection itself.
#[derive(Debug, Default, Clone)]
pub struct DeviceCollection {
    devices: Vec<Rc<dyn Device>>,
}

impl DeviceCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a device. Duplicates are allowed.
    #[tracing::instrument(skip_all, fields(device_name = %device.name(), kind = %device.kind()))]
    pub fn add(&mut self, device: Rc<dyn Device>) {
        self.devices.push(device);
        tracing::debug!(count = self.devices.len(), "device added");
    }

    /// Iterate over the devices in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<dyn Device>> {
        self.devices.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Copy the device references, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Rc<dyn Device>> {
        self.devices.clone()
    }

    /// Return a snapshot sorted with `compare`. The sort is stable.
    pub fn sorted_by<F>(&self, mut compare: F) -> Vec<Rc<dyn Device>>
    where
        F: FnMut(&dyn Device, &dyn Device) -> Ordering,
    {
        let mut sorted = self.snapshot();
        sorted.sort_by(|a, b| compare(&**a, &**b));
        sorted
    }
}

impl<'a> IntoIterator for &'a DeviceCollection {
    type Item = &'a Rc<dyn Device>;
    type IntoIter = std::slice::Iter<'a, Rc<dyn Device>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Rc<dyn Device>> for DeviceCollection {
    fn from_iter<I: IntoIterator<Item = Rc<dyn Device>>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl Extend<Rc<dyn Device>> for DeviceCollection {
    fn extend<I: IntoIterator<Item = Rc<dyn Device>>>(&mut self, iter: I) {
        for device in iter {
            self.add(device);
        }
    }
}
