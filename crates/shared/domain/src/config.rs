use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GantryConfig {
    pub endpoints: EndpointTable,
}

/// Per-endpoint declarative configuration, one entry per relative path key.
///
/// Every field is optional; the original schema's camelCase spellings are
/// accepted as aliases of the native snake_case names.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// The server-side implementor identifier.
    pub implementor: Option<String>,
    /// The WSDL location.
    pub wsdl: Option<String>,
    /// The protocol binding identifier.
    #[serde(alias = "soapBinding")]
    pub soap_binding: Option<String>,
    /// The client endpoint URL (defaults to [`DEFAULT_CLIENT_URL`] at resolution).
    ///
    /// [`DEFAULT_CLIENT_URL`]: crate::address::DEFAULT_CLIENT_URL
    #[serde(alias = "clientEndpointUrl")]
    pub client_endpoint_url: Option<String>,
    /// The server endpoint URL advertised to consumers.
    #[serde(alias = "publishedEndpointUrl")]
    pub published_endpoint_url: Option<String>,
    /// The service interface identifier consumed by clients.
    #[serde(alias = "serviceInterface")]
    pub service_interface: Option<String>,
    /// The endpoint namespace (paired with `endpoint_name`).
    #[serde(alias = "endpointNamespace")]
    pub endpoint_namespace: Option<String>,
    /// The endpoint local name (paired with `endpoint_namespace`).
    #[serde(alias = "endpointName")]
    pub endpoint_name: Option<String>,
    /// The username for HTTP Basic auth.
    pub username: Option<String>,
    /// The password for HTTP Basic auth.
    pub password: Option<String>,
    /// Ordered feature names.
    pub features: Vec<String>,
    /// Ordered inbound interceptor names.
    #[serde(alias = "inInterceptors")]
    pub in_interceptors: Vec<String>,
    /// Ordered outbound interceptor names.
    #[serde(alias = "outInterceptors")]
    pub out_interceptors: Vec<String>,
    /// Ordered outbound-fault interceptor names.
    #[serde(alias = "outFaultInterceptors")]
    pub out_fault_interceptors: Vec<String>,
    /// Ordered inbound-fault interceptor names.
    #[serde(alias = "inFaultInterceptors")]
    pub in_fault_interceptors: Vec<String>,
}

impl EndpointConfig {
    /// Copies the five ordered name lists into an owned [`ChainConfig`].
    ///
    /// Descriptors receive copies, never references: mutating one
    /// descriptor's chains must not affect another.
    #[must_use]
    pub fn chains(&self) -> ChainConfig {
        ChainConfig {
            features: self.features.clone(),
            in_interceptors: self.in_interceptors.clone(),
            out_interceptors: self.out_interceptors.clone(),
            out_fault_interceptors: self.out_fault_interceptors.clone(),
            in_fault_interceptors: self.in_fault_interceptors.clone(),
        }
    }
}

/// The five ordered extension-name lists carried by every descriptor.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub features: Vec<String>,
    pub in_interceptors: Vec<String>,
    pub out_interceptors: Vec<String>,
    pub out_fault_interceptors: Vec<String>,
    pub in_fault_interceptors: Vec<String>,
}

/// Insertion-ordered mapping from relative path key to [`EndpointConfig`].
///
/// Path keys are unique; re-inserting a key replaces the entry while keeping
/// its original position. The table is built once at startup and treated as
/// read-only afterwards—resolution depends on stable iteration order.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct EndpointTable {
    endpoints: IndexMap<String, EndpointConfig>,
}

impl EndpointTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an endpoint under a path key, returning any replaced entry.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        endpoint: EndpointConfig,
    ) -> Option<EndpointConfig> {
        self.endpoints.insert(path.into(), endpoint)
    }

    /// Returns the endpoint configured under a path key.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&EndpointConfig> {
        self.endpoints.get(path)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointConfig)> {
        self.endpoints.iter().map(|(path, endpoint)| (path.as_str(), endpoint))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, EndpointConfig)> for EndpointTable {
    fn from_iter<I: IntoIterator<Item = (P, EndpointConfig)>>(iter: I) -> Self {
        Self {
            endpoints: iter.into_iter().map(|(path, endpoint)| (path.into(), endpoint)).collect(),
        }
    }
}
