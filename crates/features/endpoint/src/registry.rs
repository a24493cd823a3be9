use gantry_domain::config::EndpointTable;
use gantry_domain::descriptor::ServerDescriptor;
use std::sync::Arc;
use tracing::trace;

/// Caller-supplied identity of an implementor being published.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub implementor: String,
    pub service_interface: String,
    pub binding: Option<String>,
    pub wrapper_names: Vec<String>,
}

impl PublishRequest {
    #[must_use]
    pub fn new(implementor: impl Into<String>, service_interface: impl Into<String>) -> Self {
        Self {
            implementor: implementor.into(),
            service_interface: service_interface.into(),
            binding: None,
            wrapper_names: Vec::new(),
        }
    }
}

/// Collects published endpoints during startup, then freezes them.
///
/// All `publish` calls happen sequentially during the startup phase;
/// [`build`](Self::build) consumes the builder, so no registration can slip
/// in once the registry is handed to the request-dispatch layer.
#[derive(Debug)]
pub struct PublishedRegistryBuilder {
    base_path: String,
    descriptors: Vec<ServerDescriptor>,
}

impl Default for PublishedRegistryBuilder {
    fn default() -> Self {
        Self { base_path: "/".to_owned(), descriptors: Vec::new() }
    }
}

impl PublishedRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base path every published endpoint is served under.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Publishes one implementor: appends a descriptor for every table entry
    /// whose implementor identifier matches the request.
    ///
    /// One implementor mapped to N path keys yields exactly N descriptors,
    /// each with its own copied chains—republishing one implementation under
    /// several addresses or bindings is intentional. Entries with an absent
    /// or empty implementor are never published.
    #[must_use]
    pub fn publish(mut self, table: &EndpointTable, request: &PublishRequest) -> Self {
        for (path, endpoint) in table.iter() {
            let Some(implementor) = endpoint.implementor.as_deref() else {
                continue;
            };
            if implementor.is_empty() || implementor != request.implementor {
                continue;
            }

            trace!(implementor, path, "registering published endpoint");
            self.descriptors.push(ServerDescriptor {
                base_path: self.base_path.clone(),
                relative_path: path.to_owned(),
                implementor: implementor.to_owned(),
                service_interface: request.service_interface.clone(),
                wsdl: endpoint.wsdl.clone(),
                binding: request.binding.clone(),
                wrapper_names: request.wrapper_names.clone(),
                published_url: endpoint.published_endpoint_url.clone(),
                chains: endpoint.chains(),
            });
        }
        self
    }

    /// Freezes the registrations into an immutable registry.
    #[must_use]
    pub fn build(self) -> PublishedRegistry {
        PublishedRegistry {
            inner: Arc::new(RegistryInner {
                base_path: self.base_path,
                descriptors: self.descriptors,
            }),
        }
    }
}

#[derive(Debug)]
struct RegistryInner {
    base_path: String,
    descriptors: Vec<ServerDescriptor>,
}

/// Immutable collection of published endpoints, cheap to clone into the
/// request-dispatch layer.
#[derive(Debug, Clone)]
pub struct PublishedRegistry {
    inner: Arc<RegistryInner>,
}

impl PublishedRegistry {
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.inner.base_path
    }

    /// All published descriptors, in registration order.
    #[must_use]
    pub fn descriptors(&self) -> &[ServerDescriptor] {
        &self.inner.descriptors
    }

    /// Finds the descriptor published under a relative path.
    #[must_use]
    pub fn find_by_path(&self, relative_path: &str) -> Option<&ServerDescriptor> {
        self.inner.descriptors.iter().find(|descriptor| descriptor.relative_path == relative_path)
    }

    /// The WSDL location published under a relative path, if any.
    ///
    /// The dispatch layer answers `GET {servedPath}?wsdl` with 200 exactly
    /// when this returns `Some`.
    #[must_use]
    pub fn wsdl_for(&self, relative_path: &str) -> Option<&str> {
        self.find_by_path(relative_path).and_then(|descriptor| descriptor.wsdl.as_deref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.descriptors.is_empty()
    }
}
