use crate::fault::Fault;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single message travelling through an interceptor chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub operation: String,
    #[serde(default)]
    pub headers: FxHashMap<String, String>,
    pub body: serde_json::Value,
}

impl Envelope {
    #[must_use]
    pub fn new(operation: impl Into<String>, body: serde_json::Value) -> Self {
        Self { operation: operation.into(), headers: FxHashMap::default(), body }
    }
}

/// Carrier abstraction the proxy hands outbound envelopes to.
///
/// Implementations own the wire protocol entirely; calling one may register
/// transport-level resources (connections, bus extensions) owned by the
/// surrounding runtime. There is no cancellation or timeout semantics at
/// this level—those belong to the transport implementation.
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Delivers a request envelope to `address`, returning the response
    /// envelope or a wire fault.
    fn call(&self, address: &str, request: Envelope) -> Result<Envelope, Fault>;
}
