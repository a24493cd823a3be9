use crate::fault::Fault;
use crate::transport::Envelope;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A named, ordered processing step applied to inbound/outbound messages.
pub trait Interceptor: fmt::Debug + Send + Sync {
    /// Processes a message travelling the chain this interceptor is attached
    /// to. Returning a fault aborts the chain and routes the fault through
    /// the corresponding fault chain.
    fn handle(&self, envelope: &mut Envelope) -> Result<(), Fault>;

    /// Processes a fault travelling a fault chain. The default does nothing.
    fn handle_fault(&self, _fault: &mut Fault) {}
}

/// A named optional protocol-level capability attached at assembly time.
pub trait Feature: fmt::Debug + Send + Sync {
    /// Called once while the proxy is assembled; may extend the chains.
    fn initialize(&self, chains: &mut InterceptorChains);
}

/// Live interceptor chains for the four message phases.
#[derive(Debug, Clone, Default)]
pub struct InterceptorChains {
    pub inbound: Vec<Arc<dyn Interceptor>>,
    pub outbound: Vec<Arc<dyn Interceptor>>,
    pub outbound_fault: Vec<Arc<dyn Interceptor>>,
    pub inbound_fault: Vec<Arc<dyn Interceptor>>,
}

/// A factory may decline (return `None`) when default construction is not
/// possible for the extension it builds.
pub(crate) type InterceptorFactory = Arc<dyn Fn() -> Option<Arc<dyn Interceptor>> + Send + Sync>;
pub(crate) type FeatureFactory = Arc<dyn Fn() -> Option<Arc<dyn Feature>> + Send + Sync>;

/// Maps extension names to factories.
///
/// Populated once at startup from the known extension set; this is the
/// explicit replacement for resolving class names reflectively. A name
/// registered here is "loadable"; whether a request for it succeeds also
/// depends on the capability it was registered under.
#[derive(Default)]
pub struct ExtensionRegistry {
    interceptors: FxHashMap<String, InterceptorFactory>,
    features: FxHashMap<String, FeatureFactory>,
}

impl ExtensionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an interceptor factory under a name.
    pub fn register_interceptor(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Option<Arc<dyn Interceptor>> + Send + Sync + 'static,
    ) {
        self.interceptors.insert(name.into(), Arc::new(factory));
    }

    /// Registers a feature factory under a name.
    pub fn register_feature(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Option<Arc<dyn Feature>> + Send + Sync + 'static,
    ) {
        self.features.insert(name.into(), Arc::new(factory));
    }

    pub(crate) fn interceptor_factory(&self, name: &str) -> Option<&InterceptorFactory> {
        self.interceptors.get(name)
    }

    pub(crate) fn feature_factory(&self, name: &str) -> Option<&FeatureFactory> {
        self.features.get(name)
    }

    pub(crate) fn knows_interceptor(&self, name: &str) -> bool {
        self.interceptors.contains_key(name)
    }

    pub(crate) fn knows_feature(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("interceptors", &self.interceptors.keys().collect::<Vec<_>>())
            .field("features", &self.features.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Ambient container lookup, injected as a capability.
///
/// The resolver consults it for an existing shared/scoped instance before
/// falling back to default construction. Lookups may have side effects owned
/// by the container, not by the resolver, and the container may legitimately
/// return different instances across calls for non-shared scopes.
pub trait ExtensionContainer: fmt::Debug + Send + Sync {
    fn interceptor(&self, name: &str) -> Option<Arc<dyn Interceptor>>;
    fn feature(&self, name: &str) -> Option<Arc<dyn Feature>>;
}

/// Default [`ExtensionContainer`] backed by a locked map; one instance per
/// name, shared across every resolution.
#[derive(Debug, Clone, Default)]
pub struct SharedContainer {
    inner: Arc<RwLock<ContainerInner>>,
}

#[derive(Debug, Default)]
struct ContainerInner {
    interceptors: FxHashMap<String, Arc<dyn Interceptor>>,
    features: FxHashMap<String, Arc<dyn Feature>>,
}

impl SharedContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_interceptor(&self, name: impl Into<String>, instance: Arc<dyn Interceptor>) {
        self.inner.write().interceptors.insert(name.into(), instance);
    }

    pub fn insert_feature(&self, name: impl Into<String>, instance: Arc<dyn Feature>) {
        self.inner.write().features.insert(name.into(), instance);
    }
}

impl ExtensionContainer for SharedContainer {
    fn interceptor(&self, name: &str) -> Option<Arc<dyn Interceptor>> {
        self.inner.read().interceptors.get(name).cloned()
    }

    fn feature(&self, name: &str) -> Option<Arc<dyn Feature>> {
        self.inner.read().features.get(name).cloned()
    }
}
