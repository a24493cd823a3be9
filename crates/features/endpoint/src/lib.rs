//! Endpoint feature slice: turns the declarative endpoint table into
//! resolved descriptors.
//!
//! Client side: [`resolve_client`] scans the table for the first entry
//! matching a service interface and produces a [`ClientDescriptor`].
//! Server side: [`PublishedRegistryBuilder`] collects one
//! [`ServerDescriptor`](gantry_domain::descriptor::ServerDescriptor) per
//! published path key and freezes them into an immutable
//! [`PublishedRegistry`] for the request-dispatch layer.
//!
//! [`ClientDescriptor`]: gantry_domain::descriptor::ClientDescriptor

mod registry;
mod resolver;

pub use crate::registry::{PublishRequest, PublishedRegistry, PublishedRegistryBuilder};
pub use crate::resolver::{ClientRequest, resolve_client};
