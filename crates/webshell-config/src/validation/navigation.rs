//! Validation for the navigation allow-list and the start URL.

use webshell_common::navigation::{normalize_host, InvalidHost, NavigationPolicy, NavigationRejection};

use crate::schema::WebshellConfig;

/// Validate every allow-listed host and check that the start URL would pass
/// the navigation gate built from the same list.
pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &WebshellConfig) {
    let hosts = &config.navigation.allowed_hosts;
    if hosts.is_empty() {
        errors.push("navigation.allowed_hosts is empty".into());
    }

    let mut usable = Vec::with_capacity(hosts.len());
    for host in hosts {
        match normalize_host(host) {
            Ok(normalized) => usable.push(normalized),
            Err(InvalidHost::Empty) => {
                errors.push("navigation.allowed_hosts contains an empty entry".into());
            }
            Err(InvalidHost::Wildcard) => errors.push(format!(
                "navigation.allowed_hosts entry '{host}': wildcards are not supported"
            )),
            Err(InvalidHost::Malformed(_)) => errors.push(format!(
                "navigation.allowed_hosts entry '{host}' is not a valid host name"
            )),
        }
    }

    let start_url = &config.shell.start_url;
    match NavigationPolicy::new(&usable).check(start_url) {
        Ok(_) => {}
        Err(NavigationRejection::InvalidUrl(e)) => {
            errors.push(format!("shell.start_url '{start_url}' is not a URL: {e}"));
        }
        Err(NavigationRejection::DisallowedScheme(_)) => {
            errors.push(format!("shell.start_url '{start_url}' must use https"));
        }
        Err(NavigationRejection::MissingHost) => {
            errors.push(format!("shell.start_url '{start_url}' has no host"));
        }
        Err(NavigationRejection::DisallowedHost(_)) => errors.push(format!(
            "shell.start_url '{start_url}' is not in navigation.allowed_hosts"
        )),
    }
}
