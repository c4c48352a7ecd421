//! Application-layer errors.

use smarthome_domain::error::SmartHomeError;

/// Failure while writing the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The output sink rejected a write.
    #[error("failed to write report")]
    Io(#[from] std::io::Error),

    /// A domain-level error (introspection, validation).
    #[error("domain error")]
    Domain(#[from] SmartHomeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthome_domain::device::DeviceKind;
    use smarthome_domain::error::IntrospectionError;

    #[test]
    fn should_display_io_error() {
        let err = ReportError::from(std::io::Error::other("closed"));
        assert_eq!(err.to_string(), "failed to write report");
    }

    #[test]
    fn should_wrap_domain_error() {
        let domain = SmartHomeError::from(IntrospectionError::MissingAttribute {
            kind: DeviceKind::LightingDevice,
            attribute: "Color",
        });
        let err = ReportError::from(domain);
        assert!(matches!(
            err,
            ReportError::Domain(SmartHomeError::Introspection(_))
        ));
    }
}
