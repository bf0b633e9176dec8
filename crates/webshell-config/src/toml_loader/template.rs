//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# WebShell Configuration
# Only override what you want to change -- missing fields use defaults.

[shell]
start_url = "https://www.example.com"   # must be https and allow-listed below
# user_agent = "WebViewApp/1.0"
# window_title = "WebView App"
# devtools = false
# back_forward_gestures = true

[navigation]
# Only https pages on these hosts may load. Everything else is blocked.
allowed_hosts = ["example.com", "www.example.com", "api.example.com"]
# alert_on_block = true

[bridge]
# Message types the page may send through window.webshell.postMessage.
# enabled_types = ["getLocation", "takePhoto", "showNotification", "saveFile", "getUserInfo"]
# min_id_length = 10     # 10-128

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
