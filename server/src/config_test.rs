use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert!(config.assets_dir.ends_with("../public"));
}

#[test]
fn blank_assets_dir_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("ASSETS_DIR", "  ")])).unwrap();
    assert!(config.assets_dir.ends_with("../public"));
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/undangan"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(config.assets_dir, PathBuf::from("/srv/undangan"));
}

#[test]
fn port_tolerates_surrounding_whitespace() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 4000\n")])).unwrap();
    assert_eq!(config.port, 4000);
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { key: "PORT", .. }));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerError::Config { key: "PORT", .. }));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost:3000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost:3000\"");
}
