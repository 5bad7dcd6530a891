use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, catalog_path: None, site_root: None });
}

#[test]
fn reads_all_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("CATALOG_PATH", "data/products.json"),
        ("SITE_ROOT", "site"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("data/products.json")));
    assert_eq!(cfg.site_root, Some(PathBuf::from("site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("CATALOG_PATH", ""), ("SITE_ROOT", " ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.catalog_path.is_none());
    assert!(cfg.site_root.is_none());
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

// =============================================================================
// from_env
// =============================================================================

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("CATALOG_PATH");
        std::env::remove_var("SITE_ROOT");
    }
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "4010");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4010);
    assert!(cfg.catalog_path.is_none());

    unsafe { clear_server_env() };
}
