//! Facade crate for the `gantry` endpoint-resolution and proxy-assembly
//! engine. Re-exports the member crates and aggregates the common
//! resolve-then-assemble flow.
//! Keep this crate thin: it should compose other crates, not implement
//! resolution logic.
//!
//! ## Usage
//! - Load a [`GantryConfig`](domain::config::GantryConfig) with
//!   [`kernel::config::load_config`].
//! - Resolve and assemble clients with [`build_client`].
//! - Publish server endpoints with
//!   [`endpoint::PublishedRegistryBuilder`].

pub use gantry_client as client;
pub use gantry_domain as domain;
pub use gantry_endpoint as endpoint;
pub use gantry_kernel as kernel;

use gantry_client::{
    ClientAssembler, ClientError, ClientProxy, ExtensionContainer, ExtensionRegistry,
    InterfaceCatalog, Transport,
};
use gantry_domain::config::EndpointTable;
use gantry_endpoint::{ClientRequest, resolve_client};
use std::sync::Arc;

/// Resolves a service interface and assembles its client proxy in one step.
///
/// Returns `Ok(None)` when no endpoint configuration matches the requested
/// service interface—a soft outcome; the interface may be server-only.
///
/// # Errors
/// Returns [`ClientError::InterfaceNotFound`] when a configuration entry
/// matched but the interface identifier is not present in the catalog.
pub fn build_client(
    table: &EndpointTable,
    request: &ClientRequest,
    catalog: &InterfaceCatalog,
    registry: &ExtensionRegistry,
    container: Option<&dyn ExtensionContainer>,
    transport: Arc<dyn Transport>,
) -> Result<Option<ClientProxy>, ClientError> {
    let Some(descriptor) = resolve_client(table, request) else {
        return Ok(None);
    };

    let mut assembler = ClientAssembler::new(catalog, registry);
    if let Some(container) = container {
        assembler = assembler.with_container(container);
    }
    assembler.assemble(&descriptor, transport).map(Some)
}
