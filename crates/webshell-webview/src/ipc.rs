//! IPC glue between the page and the host.
//!
//! - **Page -> host**: the page calls `window.webshell.postMessage(type, data)`,
//!   which posts `{type, id, data}` as JSON through `window.ipc.postMessage`
//!   and triggers the `ipc_handler` registered on the WebView.
//!   `window.ReactNativeWebView.postMessage(string)` is shimmed onto the same
//!   channel so pages written for the mobile shell work unchanged.
//! - **Host -> page**: the host evaluates scripts such as [`js_alert`].

/// JavaScript snippet injected into every page before it runs.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.webshell) {
        return;
    }
    function newId() {
        if (window.crypto && typeof window.crypto.randomUUID === 'function') {
            return window.crypto.randomUUID();
        }
        var rand = Math.random().toString(36).slice(2) + '0000000000';
        return Date.now().toString(36) + '-' + rand.slice(0, 10);
    }
    window.webshell = {
        postMessage: function(type, data) {
            var msg = { type: type, id: newId() };
            if (data !== undefined) {
                msg.data = data;
            }
            window.ipc.postMessage(JSON.stringify(msg));
            return msg.id;
        }
    };
    window.ReactNativeWebView = window.ReactNativeWebView || {
        postMessage: function(raw) {
            window.ipc.postMessage(String(raw));
        }
    };
})();
"#;

/// Generate a JS snippet that shows a blocking alert in the page.
pub fn js_alert(title: &str, body: &str) -> String {
    let text = if body.is_empty() {
        title.to_string()
    } else {
        format!("{title}\n\n{body}")
    };
    let literal = serde_json::to_string(&text).unwrap_or_else(|_| "\"\"".to_string());
    format!("window.alert({literal});")
}
