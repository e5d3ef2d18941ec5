use entrepreneur_router::config::{AppConfig, LogFormat, LoggingSection};

#[test]
fn defaults_match_service_contract() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn listen_addr_joins_host_and_port() {
    let config = AppConfig::default();

    assert_eq!(config.listen_addr(), "0.0.0.0:8000");
}

#[test]
fn log_format_parses_lowercase_names() {
    let section: LoggingSection =
        serde_json::from_value(serde_json::json!({"level": "debug", "format": "json"}))
            .expect("logging section should deserialize");

    assert_eq!(section.level, "debug");
    assert_eq!(section.format, LogFormat::Json);
}
