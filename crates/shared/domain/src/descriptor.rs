//! Resolved endpoint descriptors.
//!
//! Descriptors are immutable, fully-resolved records built from the endpoint
//! table, ready for proxy assembly (client side) or request dispatch (server
//! side). Each one owns its data outright, including the extension-name
//! chains copied out of the matched configuration entry.

use crate::address::join_address;
use crate::config::ChainConfig;

/// A namespace/local-name pair identifying a service or endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespace: String,
    pub local: String,
}

impl QualifiedName {
    #[must_use]
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), local: local.into() }
    }
}

/// HTTP Basic auth credentials. Present only when both parts are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// A fully-resolved client endpoint, owned by the caller that requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDescriptor {
    /// The service interface identifier this client consumes.
    pub service_interface: String,
    /// The resolved transport address.
    pub address: String,
    pub wsdl: Option<String>,
    pub binding: Option<String>,
    pub service_name: QualifiedName,
    pub endpoint_name: Option<QualifiedName>,
    pub credentials: Option<BasicCredentials>,
    /// Implementation type names backing the interface.
    pub type_names: Vec<String>,
    pub chains: ChainConfig,
}

/// A server endpoint published under one path key.
///
/// One implementor may be published under several path keys; each produces an
/// independent descriptor with its own copied chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    pub base_path: String,
    pub relative_path: String,
    pub implementor: String,
    pub service_interface: String,
    pub wsdl: Option<String>,
    pub binding: Option<String>,
    /// Wrapper type names generated for the implementor.
    pub wrapper_names: Vec<String>,
    pub published_url: Option<String>,
    pub chains: ChainConfig,
}

impl ServerDescriptor {
    /// The path this endpoint is served under (base path + relative path).
    #[must_use]
    pub fn served_path(&self) -> String {
        join_address(&self.base_path, &self.relative_path)
    }
}
