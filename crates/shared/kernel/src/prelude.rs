//! One-stop imports for crates building on the kernel.

pub use crate::config::{ConfigError, load_config};
pub use gantry_domain::address::{DEFAULT_CLIENT_URL, join_address};
pub use gantry_domain::config::{ChainConfig, EndpointConfig, EndpointTable, GantryConfig};
pub use gantry_domain::descriptor::{
    BasicCredentials, ClientDescriptor, QualifiedName, ServerDescriptor,
};
