use super::*;

fn error_text(config: &WebshellConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&WebshellConfig::default()).is_ok());
}

#[test]
fn empty_allow_list_is_rejected() {
    let mut config = WebshellConfig::default();
    config.navigation.allowed_hosts.clear();
    let msg = error_text(&config);
    assert!(msg.contains("navigation.allowed_hosts is empty"));
    // The start URL can no longer be reached either.
    assert!(msg.contains("shell.start_url"));
}

#[test]
fn malformed_host_entries_are_rejected() {
    let mut config = WebshellConfig::default();
    config.navigation.allowed_hosts.push("   ".into());
    config.navigation.allowed_hosts.push("evil.com/path".into());
    let msg = error_text(&config);
    assert!(msg.contains("empty entry"));
    assert!(msg.contains("'evil.com/path' is not a valid host name"));
}

#[test]
fn http_start_url_is_rejected() {
    let mut config = WebshellConfig::default();
    config.shell.start_url = "http://www.example.com".into();
    assert!(error_text(&config).contains("must use https"));
}

#[test]
fn start_url_outside_allow_list_is_rejected() {
    let mut config = WebshellConfig::default();
    config.shell.start_url = "https://evil.com".into();
    assert!(error_text(&config).contains("not in navigation.allowed_hosts"));
}

#[test]
fn unparseable_start_url_is_rejected() {
    let mut config = WebshellConfig::default();
    config.shell.start_url = "not a url".into();
    assert!(error_text(&config).contains("is not a URL"));
}

#[test]
fn start_url_host_match_ignores_case() {
    let mut config = WebshellConfig::default();
    config.navigation.allowed_hosts = vec!["WWW.Example.com".into()];
    config.shell.start_url = "https://www.example.com/home".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn internationalized_host_matches_start_url() {
    let mut config = WebshellConfig::default();
    config.navigation.allowed_hosts = vec!["bücher.example".into()];
    config.shell.start_url = "https://bücher.example/".into();
    assert!(validate(&config).is_ok());

    config.navigation.allowed_hosts = vec!["xn--bcher-kva.example".into()];
    assert!(validate(&config).is_ok());
}

#[test]
fn wildcard_host_is_rejected() {
    let mut config = WebshellConfig::default();
    config.navigation.allowed_hosts.push("*.example.com".into());
    assert!(error_text(&config)
        .contains("navigation.allowed_hosts entry '*.example.com': wildcards are not supported"));
}

#[test]
fn wildcard_does_not_cover_start_url() {
    let mut config = WebshellConfig::default();
    config.navigation.allowed_hosts = vec!["*.example.com".into()];
    config.shell.start_url = "https://www.example.com".into();
    let msg = error_text(&config);
    assert!(msg.contains("wildcards are not supported"));
    assert!(msg.contains("not in navigation.allowed_hosts"));
}

#[test]
fn min_id_length_below_floor_is_rejected() {
    let mut config = WebshellConfig::default();
    config.bridge.min_id_length = 4;
    assert!(error_text(&config).contains("bridge.min_id_length = 4 is out of range [10, 128]"));
}

#[test]
fn min_id_length_can_be_raised() {
    let mut config = WebshellConfig::default();
    config.bridge.min_id_length = 32;
    assert!(validate(&config).is_ok());
}

#[test]
fn empty_enabled_types_is_rejected() {
    let mut config = WebshellConfig::default();
    config.bridge.enabled_types.clear();
    assert!(error_text(&config).contains("bridge.enabled_types is empty"));
}

#[test]
fn blank_user_agent_is_rejected() {
    let mut config = WebshellConfig::default();
    config.shell.user_agent = " ".into();
    assert!(error_text(&config).contains("shell.user_agent is empty"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = WebshellConfig::default();
    config.shell.user_agent.clear();
    config.bridge.enabled_types.clear();
    config.bridge.min_id_length = 1000;
    let msg = error_text(&config);
    assert_eq!(msg.split("; ").count(), 3);
}
