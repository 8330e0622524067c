use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_env_yields_defaults() {
    let map = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).expect("defaults should build");

    assert_eq!(config.base_url, "https://books.toscrape.com/");
    assert_eq!(config.user_agent, "Mozilla/5.0");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.inter_request_delay_ms, 0);
}

#[test]
fn base_url_and_user_agent_overrides_are_applied() {
    let map = HashMap::from([
        ("BOOKDEX_BASE_URL", "http://127.0.0.1:8080"),
        ("BOOKDEX_USER_AGENT", "bookdex-test/0.1"),
    ]);
    let config = build_app_config(lookup_from_map(&map)).expect("overrides should build");

    assert_eq!(config.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.user_agent, "bookdex-test/0.1");
}

#[test]
fn numeric_overrides_are_parsed() {
    let map = HashMap::from([
        ("BOOKDEX_REQUEST_TIMEOUT_SECS", "5"),
        ("BOOKDEX_INTER_REQUEST_DELAY_MS", "250"),
    ]);
    let config = build_app_config(lookup_from_map(&map)).expect("numeric overrides should build");

    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.inter_request_delay_ms, 250);
}

#[test]
fn invalid_timeout_is_rejected_with_var_name() {
    let map = HashMap::from([("BOOKDEX_REQUEST_TIMEOUT_SECS", "soon")]);
    let err = build_app_config(lookup_from_map(&map)).expect_err("expected invalid timeout");

    match err {
        ConfigError::InvalidEnvVar { var, .. } => {
            assert_eq!(var, "BOOKDEX_REQUEST_TIMEOUT_SECS");
        }
    }
}

#[test]
fn invalid_delay_is_rejected() {
    let map = HashMap::from([("BOOKDEX_INTER_REQUEST_DELAY_MS", "-1")]);
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn lookup_is_not_consulted_for_unrelated_variables() {
    // A set-but-unrelated variable must not leak into the config.
    let map = HashMap::from([("BOOKDEX_UNRELATED", "whatever")]);
    let config = build_app_config(lookup_from_map(&map)).expect("defaults should build");
    assert_eq!(config.base_url, "https://books.toscrape.com/");
}
