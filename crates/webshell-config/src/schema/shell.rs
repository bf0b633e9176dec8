//! Shell configuration: the hosted page and the WebView around it.

use serde::{Deserialize, Serialize};

/// What the shell loads and how the WebView presents itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Page loaded at startup. Must pass the navigation allow-list.
    pub start_url: String,
    pub user_agent: String,
    pub window_title: String,
    /// Dev tools are always available in debug builds.
    pub devtools: bool,
    pub back_forward_gestures: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_url: "https://www.example.com".into(),
            user_agent: "WebViewApp/1.0".into(),
            window_title: "WebView App".into(),
            devtools: false,
            back_forward_gestures: true,
        }
    }
}
