use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| vars.get(key).cloned()
}

#[test]
fn port_defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn port_is_read_from_environment() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn port_tolerates_surrounding_whitespace() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 9000\n")])).unwrap();
    assert_eq!(config.port, 9000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "eighty".to_owned() });
    assert!(err.to_string().contains("eighty"));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
