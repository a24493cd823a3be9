use crate::error::ClientError;
use crate::extension::{ExtensionContainer, ExtensionRegistry, InterceptorChains};
use crate::proxy::{ClientProxy, ProxyParts};
use crate::resolve::ComponentResolver;
use crate::transport::Transport;
use fxhash::FxHashMap;
use gantry_domain::descriptor::ClientDescriptor;
use std::sync::Arc;
use tracing::info;

/// Contract metadata for one service interface: the identifier plus the
/// operation names a proxy bound to it may invoke.
#[derive(Debug, Clone)]
pub struct InterfaceSpec {
    id: String,
    operations: Vec<String>,
}

impl InterfaceSpec {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        operations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            operations: operations.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn has_operation(&self, operation: &str) -> bool {
        self.operations.iter().any(|op| op == operation)
    }
}

/// Known service interfaces, keyed by identifier.
///
/// Populated at startup from the application's interface set; this is what
/// makes a service-interface identifier "loadable" at assembly time.
#[derive(Debug, Clone, Default)]
pub struct InterfaceCatalog {
    entries: FxHashMap<String, Arc<InterfaceSpec>>,
}

impl InterfaceCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: InterfaceSpec) {
        self.entries.insert(spec.id().to_owned(), Arc::new(spec));
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<InterfaceSpec>> {
        self.entries.get(id).cloned()
    }
}

/// Builds fully wired, invocable proxies from resolved descriptors.
///
/// Each `assemble` call builds its own proxy; the assembler holds no mutable
/// state and is safely callable from independent call sites.
#[derive(Debug, Clone, Copy)]
pub struct ClientAssembler<'a> {
    catalog: &'a InterfaceCatalog,
    registry: &'a ExtensionRegistry,
    container: Option<&'a dyn ExtensionContainer>,
}

impl<'a> ClientAssembler<'a> {
    #[must_use]
    pub fn new(catalog: &'a InterfaceCatalog, registry: &'a ExtensionRegistry) -> Self {
        Self { catalog, registry, container: None }
    }

    /// Attaches the ambient container consulted during extension resolution.
    #[must_use]
    pub fn with_container(mut self, container: &'a dyn ExtensionContainer) -> Self {
        self.container = Some(container);
        self
    }

    /// Assembles a proxy for a descriptor.
    ///
    /// The service interface is mandatory: an identifier missing from the
    /// catalog aborts with [`ClientError::InterfaceNotFound`]. Extension
    /// names resolve best-effort—unresolvable names are dropped from their
    /// chain—and each resolved feature gets one initialization callback that
    /// may extend the chains.
    pub fn assemble(
        &self,
        descriptor: &ClientDescriptor,
        transport: Arc<dyn Transport>,
    ) -> Result<ClientProxy, ClientError> {
        let Some(interface) = self.catalog.get(&descriptor.service_interface) else {
            return Err(ClientError::InterfaceNotFound {
                service_interface: descriptor.service_interface.clone(),
            });
        };

        let resolver = ComponentResolver::new(self.registry, self.container);
        let mut chains = InterceptorChains {
            inbound: resolver.interceptor_chain(&descriptor.chains.in_interceptors),
            outbound: resolver.interceptor_chain(&descriptor.chains.out_interceptors),
            outbound_fault: resolver.interceptor_chain(&descriptor.chains.out_fault_interceptors),
            inbound_fault: resolver.interceptor_chain(&descriptor.chains.in_fault_interceptors),
        };
        let features = resolver.feature_chain(&descriptor.chains.features);
        for feature in &features {
            feature.initialize(&mut chains);
        }

        // An empty WSDL location is treated as absent.
        let wsdl = descriptor.wsdl.as_deref().filter(|wsdl| !wsdl.is_empty()).map(str::to_owned);

        info!(
            service_interface = %descriptor.service_interface,
            address = %descriptor.address,
            "client proxy assembled"
        );
        Ok(ClientProxy::from_parts(ProxyParts {
            interface,
            address: descriptor.address.clone(),
            service_name: descriptor.service_name.clone(),
            endpoint_name: descriptor.endpoint_name.clone(),
            binding: descriptor.binding.clone(),
            wsdl,
            credentials: descriptor.credentials.clone(),
            features,
            chains,
            transport,
        }))
    }
}
