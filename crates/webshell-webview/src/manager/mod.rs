//! WebView hosting over `wry`.
//!
//! `WebViewManager` builds the single `wry::WebView` the shell embeds, with
//! every callback routed through one [`Interceptor`].

use std::sync::Arc;

use crate::events::WebViewEvent;
use crate::gatekeeper::Gatekeeper;
use crate::interceptor::Interceptor;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

#[derive(Debug)]
pub struct WebViewManager {
    interceptor: Interceptor,
}

impl WebViewManager {
    pub fn new(gate: Arc<Gatekeeper>) -> Self {
        Self {
            interceptor: Interceptor::new(gate),
        }
    }

    pub fn interceptor(&self) -> &Interceptor {
        &self.interceptor
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.interceptor.drain_events()
    }
}
