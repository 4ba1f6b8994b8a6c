use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================
// Defaults and overrides
// =============================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.api_base, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("ADMIN_BIND_ADDR", "127.0.0.1"),
        ("ADMIN_API_BASE", "https://api.example.test/"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.api_base.as_deref(), Some("https://api.example.test"));
}

#[test]
fn from_lookup_blank_api_base_is_demo_mode() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("ADMIN_API_BASE", "   ")])).unwrap();
    assert_eq!(cfg.api_base, None);
}

#[test]
fn from_lookup_blank_port_uses_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", " ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT value: eighty");
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = HostConfig::from_lookup(lookup_from(&[("ADMIN_BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid ADMIN_BIND_ADDR value: localhost");
}

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var(PORT_VAR);
        std::env::remove_var(BIND_ADDR_VAR);
        std::env::remove_var(API_BASE_VAR);
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_host_env();
        std::env::set_var(API_BASE_VAR, "https://env.example.test/");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.api_base.as_deref(), Some("https://env.example.test"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");

    unsafe { clear_host_env() };
}
