use crate::assembler::InterfaceSpec;
use crate::extension::{Feature, Interceptor, InterceptorChains};
use crate::fault::Fault;
use crate::transport::{Envelope, Transport};
use base64::Engine as _;
use gantry_domain::descriptor::{BasicCredentials, QualifiedName};
use std::sync::Arc;

pub(crate) struct ProxyParts {
    pub(crate) interface: Arc<InterfaceSpec>,
    pub(crate) address: String,
    pub(crate) service_name: QualifiedName,
    pub(crate) endpoint_name: Option<QualifiedName>,
    pub(crate) binding: Option<String>,
    pub(crate) wsdl: Option<String>,
    pub(crate) credentials: Option<BasicCredentials>,
    pub(crate) features: Vec<Arc<dyn Feature>>,
    pub(crate) chains: InterceptorChains,
    pub(crate) transport: Arc<dyn Transport>,
}

/// An invocable client bound to one service interface.
///
/// Every invocation flows through the wired chains: outbound interceptors
/// before the transport call, inbound interceptors after it, and faults
/// through the corresponding fault chain.
#[derive(Debug, Clone)]
pub struct ClientProxy {
    interface: Arc<InterfaceSpec>,
    address: String,
    service_name: QualifiedName,
    endpoint_name: Option<QualifiedName>,
    binding: Option<String>,
    wsdl: Option<String>,
    credentials: Option<BasicCredentials>,
    features: Vec<Arc<dyn Feature>>,
    chains: InterceptorChains,
    transport: Arc<dyn Transport>,
}

impl ClientProxy {
    pub(crate) fn from_parts(parts: ProxyParts) -> Self {
        Self {
            interface: parts.interface,
            address: parts.address,
            service_name: parts.service_name,
            endpoint_name: parts.endpoint_name,
            binding: parts.binding,
            wsdl: parts.wsdl,
            credentials: parts.credentials,
            features: parts.features,
            chains: parts.chains,
            transport: parts.transport,
        }
    }

    /// Invokes an operation through the interceptor chains and the transport.
    ///
    /// Operations the interface does not declare are rejected up front. A
    /// fault raised by an outbound interceptor routes through the
    /// outbound-fault chain; one raised by the transport or an inbound
    /// interceptor routes through the inbound-fault chain. The (possibly
    /// rewritten) fault is then surfaced to the caller.
    pub fn invoke(
        &self,
        operation: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, Fault> {
        if !self.interface.has_operation(operation) {
            return Err(Fault::new(
                "UnknownOperation",
                format!("interface `{}` does not declare operation `{operation}`", self.interface.id()),
            ));
        }

        let mut request = Envelope::new(operation, body);
        if let Some(credentials) = &self.credentials {
            request.headers.insert("authorization".to_owned(), basic_auth_header(credentials));
        }

        for interceptor in &self.chains.outbound {
            if let Err(fault) = interceptor.handle(&mut request) {
                return Err(dispatch_fault(&self.chains.outbound_fault, fault));
            }
        }

        match self.transport.call(&self.address, request) {
            Ok(mut response) => {
                for interceptor in &self.chains.inbound {
                    if let Err(fault) = interceptor.handle(&mut response) {
                        return Err(dispatch_fault(&self.chains.inbound_fault, fault));
                    }
                }
                Ok(response.body)
            },
            Err(fault) => Err(dispatch_fault(&self.chains.inbound_fault, fault)),
        }
    }

    #[must_use]
    pub fn interface(&self) -> &InterfaceSpec {
        &self.interface
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn service_name(&self) -> &QualifiedName {
        &self.service_name
    }

    #[must_use]
    pub fn endpoint_name(&self) -> Option<&QualifiedName> {
        self.endpoint_name.as_ref()
    }

    #[must_use]
    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref()
    }

    #[must_use]
    pub fn wsdl(&self) -> Option<&str> {
        self.wsdl.as_deref()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&BasicCredentials> {
        self.credentials.as_ref()
    }

    #[must_use]
    pub fn features(&self) -> &[Arc<dyn Feature>] {
        &self.features
    }

    #[must_use]
    pub fn chains(&self) -> &InterceptorChains {
        &self.chains
    }
}

/// Runs a fault through a fault chain, in order, letting each interceptor
/// rewrite it.
fn dispatch_fault(chain: &[Arc<dyn Interceptor>], mut fault: Fault) -> Fault {
    for interceptor in chain {
        interceptor.handle_fault(&mut fault);
    }
    fault
}

fn basic_auth_header(credentials: &BasicCredentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", base64::engine::general_purpose::STANDARD.encode(raw))
}
