/// Configuration for creating the shell's WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load. Must pass the navigation gate.
    pub url: String,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Swipe back/forward through history (macOS, iOS).
    pub back_forward_gestures: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "https://www.example.com".to_string(),
            user_agent: Some("WebViewApp/1.0".to_string()),
            devtools: cfg!(debug_assertions),
            back_forward_gestures: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
