use webshell_common::Notification;
use wry::WebView;

use crate::interceptor::Interceptor;
use crate::ipc::js_alert;

/// Handle to the shell's WebView.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    pub(super) interceptor: Interceptor,
}

impl WebViewHandle {
    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Show a notification to the user as a page alert.
    pub fn show_alert(&self, notification: &Notification) -> Result<(), wry::Error> {
        self.webview
            .evaluate_script(&js_alert(&notification.title, &notification.body))
    }

    /// Resize the WebView to fill `width` x `height` physical pixels.
    pub fn fill(&self, width: u32, height: u32) -> Result<(), wry::Error> {
        self.webview.set_bounds(fill_bounds(width, height))
    }

    /// Tear down the WebView, recording a `Closed` event.
    pub fn close(self) {
        self.interceptor.closed();
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

/// Bounds covering the whole parent window.
pub(super) fn fill_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::PhysicalPosition::new(0, 0).into(),
        size: wry::dpi::PhysicalSize::new(width, height).into(),
    }
}
