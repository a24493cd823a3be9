/// A specialized error enum for client assembly.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service interface identifier has no entry in the catalog.
    ///
    /// Unlike extension resolution, the interface itself is mandatory:
    /// assembly aborts instead of degrading.
    #[error("service interface not found: {service_interface}")]
    InterfaceNotFound { service_interface: String },
}
