//! Client feature slice: late-bound extension resolution and proxy assembly.
//!
//! Extensions (interceptors and features) are selected by name at startup,
//! not compiled in: the [`ExtensionRegistry`] maps names to factories, an
//! optional [`ExtensionContainer`] supplies shared instances, and the
//! [`ComponentResolver`] walks both through a three-stage fallback, dropping
//! unresolvable names from their chain without blocking startup.
//!
//! The [`ClientAssembler`] turns a resolved
//! [`ClientDescriptor`](gantry_domain::descriptor::ClientDescriptor) into an
//! invocable [`ClientProxy`] wired to a [`Transport`].

mod assembler;
mod error;
mod extension;
mod fault;
mod proxy;
mod resolve;
mod transport;

pub use crate::assembler::{ClientAssembler, InterfaceCatalog, InterfaceSpec};
pub use crate::error::ClientError;
pub use crate::extension::{
    ExtensionContainer, ExtensionRegistry, Feature, Interceptor, InterceptorChains,
    SharedContainer,
};
pub use crate::fault::Fault;
pub use crate::proxy::ClientProxy;
pub use crate::resolve::{ComponentResolver, Resolution, SkipReason};
pub use crate::transport::{Envelope, Transport};
