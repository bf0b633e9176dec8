//! Navigation allow-list configuration.

use serde::{Deserialize, Serialize};

/// Hosts the embedded page may navigate to over `https`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub allowed_hosts: Vec<String>,
    /// Show a one-shot alert when a navigation is blocked.
    pub alert_on_block: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec![
                "example.com".into(),
                "www.example.com".into(),
                "api.example.com".into(),
            ],
            alert_on_block: true,
        }
    }
}
