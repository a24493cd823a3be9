use gantry_domain::address::{DEFAULT_CLIENT_URL, join_address};
use gantry_domain::config::EndpointTable;
use gantry_domain::descriptor::{BasicCredentials, ClientDescriptor, QualifiedName};
use tracing::warn;

/// Caller-supplied identity of the client being resolved.
///
/// These fields come from the consuming application, not from the endpoint
/// table: the interface identifier, its service name, the protocol binding,
/// and the implementation type names backing the interface.
#[derive(Debug, Clone)]
pub struct ClientRequest {
    pub service_interface: String,
    pub binding: Option<String>,
    pub service_name: QualifiedName,
    pub type_names: Vec<String>,
}

impl ClientRequest {
    #[must_use]
    pub fn new(service_interface: impl Into<String>, service_name: QualifiedName) -> Self {
        Self {
            service_interface: service_interface.into(),
            binding: None,
            service_name,
            type_names: Vec::new(),
        }
    }
}

/// Resolves a service interface against the endpoint table.
///
/// Entries are scanned in insertion order; the identifier comparison is
/// case-sensitive and the *first* match wins. When several path keys declare
/// the same service interface, the first-declared one is the canonical
/// mapping—later duplicates are never consulted.
///
/// The endpoint address is the configured client URL (default
/// [`DEFAULT_CLIENT_URL`]) joined with the matched path key. Credentials are
/// carried only when both username and password are configured. The
/// interceptor and feature name lists are copied out of the matched entry.
///
/// Returns `None` when no entry matches. This is a soft outcome, logged as a
/// warning: the same interface may legitimately be server-only.
#[must_use]
pub fn resolve_client(table: &EndpointTable, request: &ClientRequest) -> Option<ClientDescriptor> {
    for (path, endpoint) in table.iter() {
        let Some(service_interface) = endpoint.service_interface.as_deref() else {
            continue;
        };
        if service_interface != request.service_interface {
            continue;
        }

        let base = endpoint.client_endpoint_url.as_deref().unwrap_or(DEFAULT_CLIENT_URL);
        let address = join_address(base, path);

        let endpoint_name = match (&endpoint.endpoint_namespace, &endpoint.endpoint_name) {
            (Some(namespace), Some(local)) => Some(QualifiedName::new(namespace, local)),
            _ => None,
        };
        let credentials = match (&endpoint.username, &endpoint.password) {
            (Some(username), Some(password)) => Some(BasicCredentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        };

        return Some(ClientDescriptor {
            service_interface: service_interface.to_owned(),
            address,
            wsdl: endpoint.wsdl.clone(),
            binding: request.binding.clone(),
            service_name: request.service_name.clone(),
            endpoint_name,
            credentials,
            type_names: request.type_names.clone(),
            chains: endpoint.chains(),
        });
    }

    warn!(
        service_interface = %request.service_interface,
        "no endpoint configuration found for service interface"
    );
    None
}
