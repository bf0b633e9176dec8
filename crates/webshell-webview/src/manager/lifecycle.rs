use tracing::{debug, info};
use webshell_common::{Result, ShellError};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::{fill_bounds, WebViewHandle};
use super::handlers::{
    attach_ipc_handler, attach_navigation_handler, attach_new_window_handler,
    attach_page_load_handler,
};
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the WebView as a child of `window`, sized to `width` x
    /// `height` physical pixels.
    ///
    /// The initial URL goes through the same gate as every later navigation;
    /// a blocked start URL is an error rather than a blank page.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        (width, height): (u32, u32),
        config: WebViewConfig,
    ) -> Result<WebViewHandle> {
        if !self.interceptor.intercept_navigation(&config.url) {
            return Err(ShellError::WebView(format!(
                "start URL blocked by navigation allow-list: {}",
                config.url
            )));
        }

        let mut builder = WebViewBuilder::new()
            .with_bounds(fill_bounds(width, height))
            .with_devtools(config.devtools)
            .with_back_forward_navigation_gestures(config.back_forward_gestures)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_ipc_handler(builder, self.interceptor.clone());
        builder = attach_page_load_handler(builder, self.interceptor.clone());
        builder = attach_navigation_handler(builder, self.interceptor.clone());
        builder = attach_new_window_handler(builder, self.interceptor.clone());

        let webview = builder
            .with_url(&config.url)
            .build_as_child(window)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        info!(url = %config.url, "WebView created");
        debug!(user_agent = ?config.user_agent, devtools = config.devtools, "WebView options");

        Ok(WebViewHandle {
            webview,
            interceptor: self.interceptor.clone(),
        })
    }
}
