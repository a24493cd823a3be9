use crate::extension::{ExtensionContainer, ExtensionRegistry, Feature, Interceptor};
use std::sync::Arc;
use tracing::warn;

/// Outcome of resolving one named extension.
///
/// Skips never propagate as errors—optional extensions must not block
/// startup—but each one is logged, so failures stay observable without
/// entering control flow.
#[derive(Debug)]
pub enum Resolution<T: ?Sized> {
    /// A live instance, ready to join its chain.
    Resolved(Arc<T>),
    /// The name resolved to nothing and is omitted from its chain.
    Skipped(SkipReason),
}

impl<T: ?Sized> Resolution<T> {
    /// The resolved instance, if any.
    #[must_use]
    pub fn resolved(self) -> Option<Arc<T>> {
        match self {
            Self::Resolved(instance) => Some(instance),
            Self::Skipped(_) => None,
        }
    }

    #[must_use]
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Resolved(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }
}

/// Why a name failed every fallback stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The name is not registered under any capability.
    UnknownName,
    /// The name is registered, but not with the required capability.
    MissingCapability,
    /// No container instance existed and the factory declined to construct one.
    ConstructionFailed,
}

/// Resolves extension names through an ordered three-stage fallback:
///
/// 1. registry lookup—the name must be registered with the required
///    capability;
/// 2. container lookup—an existing shared/scoped instance wins;
/// 3. default construction through the registered factory.
///
/// The resolver is pure with respect to its inputs except for container
/// lookups, whose side effects belong to the container.
#[derive(Debug, Clone, Copy)]
pub struct ComponentResolver<'a> {
    registry: &'a ExtensionRegistry,
    container: Option<&'a dyn ExtensionContainer>,
}

impl<'a> ComponentResolver<'a> {
    #[must_use]
    pub fn new(
        registry: &'a ExtensionRegistry,
        container: Option<&'a dyn ExtensionContainer>,
    ) -> Self {
        Self { registry, container }
    }

    /// Resolves one name against the interceptor capability.
    #[must_use]
    pub fn interceptor(&self, name: &str) -> Resolution<dyn Interceptor> {
        let Some(factory) = self.registry.interceptor_factory(name) else {
            let reason = if self.registry.knows_feature(name) {
                SkipReason::MissingCapability
            } else {
                SkipReason::UnknownName
            };
            return skip("interceptor", name, reason);
        };
        if let Some(container) = self.container {
            if let Some(instance) = container.interceptor(name) {
                return Resolution::Resolved(instance);
            }
        }
        match factory() {
            Some(instance) => Resolution::Resolved(instance),
            None => skip("interceptor", name, SkipReason::ConstructionFailed),
        }
    }

    /// Resolves one name against the feature capability.
    #[must_use]
    pub fn feature(&self, name: &str) -> Resolution<dyn Feature> {
        let Some(factory) = self.registry.feature_factory(name) else {
            let reason = if self.registry.knows_interceptor(name) {
                SkipReason::MissingCapability
            } else {
                SkipReason::UnknownName
            };
            return skip("feature", name, reason);
        };
        if let Some(container) = self.container {
            if let Some(instance) = container.feature(name) {
                return Resolution::Resolved(instance);
            }
        }
        match factory() {
            Some(instance) => Resolution::Resolved(instance),
            None => skip("feature", name, SkipReason::ConstructionFailed),
        }
    }

    /// Resolves a name list in configured order, omitting skipped names while
    /// preserving the relative order of the remainder.
    #[must_use]
    pub fn interceptor_chain(&self, names: &[String]) -> Vec<Arc<dyn Interceptor>> {
        names.iter().filter_map(|name| self.interceptor(name).resolved()).collect()
    }

    /// Feature counterpart of [`interceptor_chain`](Self::interceptor_chain).
    #[must_use]
    pub fn feature_chain(&self, names: &[String]) -> Vec<Arc<dyn Feature>> {
        names.iter().filter_map(|name| self.feature(name).resolved()).collect()
    }
}

fn skip<T: ?Sized>(capability: &str, name: &str, reason: SkipReason) -> Resolution<T> {
    warn!(capability, name, ?reason, "extension skipped");
    Resolution::Skipped(reason)
}
