use gantry_kernel::config::{ConfigError, load_config};
use gantry_kernel::domain::config::GantryConfig;
use std::fs;

#[test]
fn loads_endpoint_table_from_toml_in_declaration_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("gantry.toml");
    fs::write(
        &path,
        r#"
[endpoints."/greeting"]
implementor = "GreetingImpl"
service_interface = "Greet"
client_endpoint_url = "http://host"
in_interceptors = ["log"]

[endpoints."/fraud"]
service_interface = "Fraud"
"#,
    )
    .expect("write config");

    let config: GantryConfig = load_config(Some(&path)).expect("load config");
    assert_eq!(config.endpoints.len(), 2);

    let paths: Vec<&str> = config.endpoints.iter().map(|(p, _)| p).collect();
    assert_eq!(paths, vec!["/greeting", "/fraud"]);

    let greeting = config.endpoints.get("/greeting").expect("greeting entry");
    assert_eq!(greeting.implementor.as_deref(), Some("GreetingImpl"));
    assert_eq!(greeting.service_interface.as_deref(), Some("Greet"));
    assert_eq!(greeting.in_interceptors, vec!["log"]);
}

#[test]
fn missing_file_surfaces_a_typed_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result: Result<GantryConfig, _> = load_config(Some(dir.path().join("absent.toml")));

    assert!(matches!(result, Err(ConfigError::Load { .. })));
}
