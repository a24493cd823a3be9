use gantry::build_client;
use gantry::client::{
    Envelope, ExtensionRegistry, Fault, Interceptor, InterfaceCatalog, InterfaceSpec, Transport,
};
use gantry::domain::config::GantryConfig;
use gantry::domain::descriptor::QualifiedName;
use gantry::endpoint::{ClientRequest, PublishRequest, PublishedRegistryBuilder};
use gantry::kernel::config::load_config;
use serde_json::json;
use std::fs;
use std::sync::Arc;

#[derive(Debug)]
struct EchoTransport;

impl Transport for EchoTransport {
    fn call(&self, address: &str, request: Envelope) -> Result<Envelope, Fault> {
        let body = json!({ "address": address, "payload": request.body });
        Ok(Envelope::new(request.operation, body))
    }
}

#[derive(Debug)]
struct StampHeader;

impl Interceptor for StampHeader {
    fn handle(&self, envelope: &mut Envelope) -> Result<(), Fault> {
        envelope.headers.insert("x-stamp".to_owned(), "gantry".to_owned());
        Ok(())
    }
}

fn greet_catalog() -> InterfaceCatalog {
    let mut catalog = InterfaceCatalog::new();
    catalog.register(InterfaceSpec::new("Greet", ["ping"]));
    catalog
}

fn greet_request() -> ClientRequest {
    ClientRequest::new("Greet", QualifiedName::new("http://example.org/greet", "GreetService"))
}

fn load_from(raw: &str) -> GantryConfig {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gantry.toml");
    fs::write(&path, raw).expect("write config");
    load_config(Some(&path)).expect("load config")
}

#[test]
fn empty_path_key_resolves_to_the_configured_base() {
    let config = load_from(
        r#"
[endpoints.""]
service_interface = "Greet"
client_endpoint_url = "http://localhost:8080"
"#,
    );

    let catalog = greet_catalog();
    let registry = ExtensionRegistry::new();
    let proxy = build_client(
        &config.endpoints,
        &greet_request(),
        &catalog,
        &registry,
        None,
        Arc::new(EchoTransport),
    )
    .expect("assembly succeeds")
    .expect("configuration matches");

    assert_eq!(proxy.address(), "http://localhost:8080");
}

#[test]
fn path_key_joins_without_duplicate_separator() {
    let config = load_from(
        r#"
[endpoints."/v2"]
service_interface = "Greet"
client_endpoint_url = "http://host/"
"#,
    );

    let catalog = greet_catalog();
    let registry = ExtensionRegistry::new();
    let proxy = build_client(
        &config.endpoints,
        &greet_request(),
        &catalog,
        &registry,
        None,
        Arc::new(EchoTransport),
    )
    .expect("assembly succeeds")
    .expect("configuration matches");

    assert_eq!(proxy.address(), "http://host/v2");
}

#[test]
fn unmatched_interface_is_a_soft_none() {
    let config = load_from(
        r#"
[endpoints."/fraud"]
service_interface = "Fraud"
"#,
    );

    let catalog = greet_catalog();
    let registry = ExtensionRegistry::new();
    let outcome = build_client(
        &config.endpoints,
        &greet_request(),
        &catalog,
        &registry,
        None,
        Arc::new(EchoTransport),
    )
    .expect("soft outcome is not an error");

    assert!(outcome.is_none());
}

#[test]
fn full_pipeline_from_file_to_invocation_and_publication() {
    let config = load_from(
        r#"
[endpoints."/greeting"]
implementor = "GreetingImpl"
service_interface = "Greet"
client_endpoint_url = "http://localhost:8080"
wsdl = "greeting.wsdl"
out_interceptors = ["stamp"]
"#,
    );

    // Client side.
    let catalog = greet_catalog();
    let mut registry = ExtensionRegistry::new();
    registry.register_interceptor("stamp", || Some(Arc::new(StampHeader) as Arc<dyn Interceptor>));

    let proxy = build_client(
        &config.endpoints,
        &greet_request(),
        &catalog,
        &registry,
        None,
        Arc::new(EchoTransport),
    )
    .expect("assembly succeeds")
    .expect("configuration matches");

    assert_eq!(proxy.address(), "http://localhost:8080/greeting");
    assert_eq!(proxy.chains().outbound.len(), 1);

    let body = proxy.invoke("ping", json!("hello")).expect("invocation succeeds");
    assert_eq!(body["address"], json!("http://localhost:8080/greeting"));
    assert_eq!(body["payload"], json!("hello"));

    // Server side.
    let published = PublishedRegistryBuilder::new()
        .base_path("/services")
        .publish(&config.endpoints, &PublishRequest::new("GreetingImpl", "Greet"))
        .build();

    assert_eq!(published.len(), 1);
    assert_eq!(published.descriptors()[0].served_path(), "/services/greeting");
    // `GET /services/greeting?wsdl` would answer 200: the WSDL is published.
    assert_eq!(published.wsdl_for("/greeting"), Some("greeting.wsdl"));
}
