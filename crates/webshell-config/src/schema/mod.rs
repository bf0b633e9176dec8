//! Configuration schema types for the shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod navigation;
mod shell;
mod system;

pub use bridge::*;
pub use navigation::*;
pub use shell::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WebshellConfig {
    pub shell: ShellConfig,
    pub navigation: NavigationConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use webshell_common::MessageKind;

    #[test]
    fn default_shell_section() {
        let config = WebshellConfig::default();
        assert_eq!(config.shell.start_url, "https://www.example.com");
        assert_eq!(config.shell.user_agent, "WebViewApp/1.0");
        assert!(config.shell.back_forward_gestures);
        assert!(!config.shell.devtools);
    }

    #[test]
    fn default_navigation_allow_list() {
        let config = WebshellConfig::default();
        assert_eq!(
            config.navigation.allowed_hosts,
            vec!["example.com", "www.example.com", "api.example.com"]
        );
        assert!(config.navigation.alert_on_block);
    }

    #[test]
    fn default_bridge_enables_every_type() {
        let config = WebshellConfig::default();
        assert_eq!(config.bridge.enabled_types, MessageKind::ALL.to_vec());
        assert_eq!(config.bridge.min_id_length, 10);
    }

    #[test]
    fn default_logging_is_info() {
        let config = WebshellConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "webshell=info");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: WebshellConfig = toml::from_str(
            r#"
[navigation]
allowed_hosts = ["greensupia.com"]
"#,
        )
        .unwrap();
        assert_eq!(config.navigation.allowed_hosts, vec!["greensupia.com"]);
        assert!(config.navigation.alert_on_block);
        assert_eq!(config.shell.user_agent, "WebViewApp/1.0");
    }

    #[test]
    fn enabled_types_parse_wire_names() {
        let config: WebshellConfig = toml::from_str(
            r#"
[bridge]
enabled_types = ["getLocation", "showNotification"]
"#,
        )
        .unwrap();
        assert_eq!(
            config.bridge.enabled_types,
            vec![MessageKind::GetLocation, MessageKind::ShowNotification]
        );
    }

    #[test]
    fn unknown_enabled_type_is_a_parse_error() {
        let result: Result<WebshellConfig, _> = toml::from_str(
            r#"
[bridge]
enabled_types = ["runShell"]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: WebshellConfig = toml::from_str(
            r#"
[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "webshell=debug");
    }
}
