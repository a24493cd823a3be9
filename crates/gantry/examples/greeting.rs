//! End-to-end walkthrough: load a configuration file, publish the server
//! side, assemble a client proxy, and invoke it against an in-process
//! transport.
//!
//! Run with `cargo run --example greeting`.

use gantry::build_client;
use gantry::client::{Envelope, ExtensionRegistry, Fault, Interceptor, InterfaceCatalog, InterfaceSpec, Transport};
use gantry::domain::config::GantryConfig;
use gantry::domain::descriptor::QualifiedName;
use gantry::endpoint::{ClientRequest, PublishRequest, PublishedRegistryBuilder};
use gantry::kernel::config::load_config;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tracing::info;

/// Answers every ping with a greeting.
#[derive(Debug)]
struct LoopbackTransport;

impl Transport for LoopbackTransport {
    fn call(&self, address: &str, request: Envelope) -> Result<Envelope, Fault> {
        info!(address, operation = %request.operation, "transport call");
        let name = request.body.as_str().unwrap_or("world");
        Ok(Envelope::new(request.operation, json!(format!("Hello {name}"))))
    }
}

/// Stamps outbound envelopes so the transport can attribute them.
#[derive(Debug)]
struct StampHeader;

impl Interceptor for StampHeader {
    fn handle(&self, envelope: &mut Envelope) -> Result<(), Fault> {
        envelope.headers.insert("x-stamp".to_owned(), "greeting-demo".to_owned());
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("gantry.toml");
    fs::write(
        &config_path,
        r#"
[endpoints."/greeting"]
implementor = "GreetingImpl"
service_interface = "Greet"
client_endpoint_url = "http://localhost:8080"
wsdl = "greeting.wsdl"
out_interceptors = ["stamp", "metrics"]
"#,
    )?;
    let config: GantryConfig = load_config(Some(&config_path))?;

    // The known extension set; "metrics" is deliberately absent and will be
    // skipped with a warning instead of blocking startup.
    let mut registry = ExtensionRegistry::new();
    registry.register_interceptor("stamp", || Some(Arc::new(StampHeader) as Arc<dyn Interceptor>));

    let mut catalog = InterfaceCatalog::new();
    catalog.register(InterfaceSpec::new("Greet", ["ping"]));

    let request =
        ClientRequest::new("Greet", QualifiedName::new("http://example.org/greet", "GreetService"));
    let proxy = build_client(
        &config.endpoints,
        &request,
        &catalog,
        &registry,
        None,
        Arc::new(LoopbackTransport),
    )?
    .ok_or("no endpoint configured for the Greet interface")?;

    let reply = proxy.invoke("ping", json!("gantry"))?;
    info!(%reply, address = proxy.address(), "client round trip complete");

    let published = PublishedRegistryBuilder::new()
        .base_path("/services")
        .publish(&config.endpoints, &PublishRequest::new("GreetingImpl", "Greet"))
        .build();
    info!(
        served_path = %published.descriptors()[0].served_path(),
        wsdl = ?published.wsdl_for("/greeting"),
        "server side published"
    );

    Ok(())
}
