use gantry_domain::config::{EndpointConfig, EndpointTable};
use gantry_domain::descriptor::QualifiedName;
use gantry_endpoint::{ClientRequest, resolve_client};

fn greet_request() -> ClientRequest {
    ClientRequest::new("Greet", QualifiedName::new("http://example.org/greet", "GreetService"))
}

fn entry(service_interface: &str, client_url: Option<&str>) -> EndpointConfig {
    EndpointConfig {
        service_interface: Some(service_interface.to_owned()),
        client_endpoint_url: client_url.map(str::to_owned),
        ..Default::default()
    }
}

#[test]
fn default_address_for_empty_path_key() {
    let table: EndpointTable = [("", entry("Greet", None))].into_iter().collect();

    let descriptor = resolve_client(&table, &greet_request()).expect("resolved");
    assert_eq!(descriptor.address, "http://localhost:8080");
    assert_eq!(descriptor.service_interface, "Greet");
}

#[test]
fn configured_base_joined_with_path_key() {
    let table: EndpointTable = [("/v2", entry("Greet", Some("http://host/")))].into_iter().collect();

    let descriptor = resolve_client(&table, &greet_request()).expect("resolved");
    assert_eq!(descriptor.address, "http://host/v2");
}

#[test]
fn entries_without_service_interface_are_skipped() {
    let unrelated =
        EndpointConfig { implementor: Some("GreetingImpl".into()), ..Default::default() };
    let table: EndpointTable =
        [("/impl-only", unrelated), ("/greet", entry("Greet", None))].into_iter().collect();

    let descriptor = resolve_client(&table, &greet_request()).expect("resolved");
    assert_eq!(descriptor.address, "http://localhost:8080/greet");
}

#[test]
fn first_declared_match_wins_on_duplicate_interfaces() {
    let table: EndpointTable = [
        ("/first", entry("Greet", Some("http://first"))),
        ("/second", entry("Greet", Some("http://second"))),
    ]
    .into_iter()
    .collect();

    let descriptor = resolve_client(&table, &greet_request()).expect("resolved");
    assert_eq!(descriptor.address, "http://first/first");
}

#[test]
fn interface_comparison_is_case_sensitive() {
    let table: EndpointTable = [("/greet", entry("greet", None))].into_iter().collect();

    assert!(resolve_client(&table, &greet_request()).is_none());
}

#[test]
fn no_match_is_a_soft_none_not_an_error() {
    let table = EndpointTable::new();

    assert!(resolve_client(&table, &greet_request()).is_none());
}

#[test]
fn credentials_require_both_parts() {
    let mut half = entry("Greet", None);
    half.username = Some("alice".into());
    let table: EndpointTable = [("/greet", half)].into_iter().collect();
    assert!(resolve_client(&table, &greet_request()).expect("resolved").credentials.is_none());

    let mut full = entry("Greet", None);
    full.username = Some("alice".into());
    full.password = Some("secret".into());
    let table: EndpointTable = [("/greet", full)].into_iter().collect();
    let credentials =
        resolve_client(&table, &greet_request()).expect("resolved").credentials.expect("credentials");
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn endpoint_name_requires_namespace_and_local_name() {
    let mut endpoint = entry("Greet", None);
    endpoint.endpoint_namespace = Some("http://example.org/greet".into());
    let table: EndpointTable = [("/greet", endpoint)].into_iter().collect();
    assert!(resolve_client(&table, &greet_request()).expect("resolved").endpoint_name.is_none());

    let mut endpoint = entry("Greet", None);
    endpoint.endpoint_namespace = Some("http://example.org/greet".into());
    endpoint.endpoint_name = Some("GreetPort".into());
    let table: EndpointTable = [("/greet", endpoint)].into_iter().collect();
    let name =
        resolve_client(&table, &greet_request()).expect("resolved").endpoint_name.expect("endpoint name");
    assert_eq!(name.local, "GreetPort");
}

#[test]
fn chains_and_caller_fields_are_carried() {
    let mut endpoint = entry("Greet", None);
    endpoint.features = vec!["wsa".into()];
    endpoint.out_interceptors = vec!["sign".into(), "log".into()];
    let table: EndpointTable = [("/greet", endpoint)].into_iter().collect();

    let mut request = greet_request();
    request.binding = Some("soap-1.2".into());
    request.type_names = vec!["GreetStub".into()];

    let descriptor = resolve_client(&table, &request).expect("resolved");
    assert_eq!(descriptor.binding.as_deref(), Some("soap-1.2"));
    assert_eq!(descriptor.type_names, vec!["GreetStub"]);
    assert_eq!(descriptor.chains.features, vec!["wsa"]);
    assert_eq!(descriptor.chains.out_interceptors, vec!["sign", "log"]);
}
