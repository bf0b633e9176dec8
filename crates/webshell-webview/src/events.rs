//! WebView event types.

use serde::{Deserialize, Serialize};

use crate::navigation::NavigationRejection;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

#[cfg(feature = "wry")]
impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events recorded from WebView callbacks for the host's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// A navigation was stopped by the gatekeeper.
    NavigationBlocked {
        url: String,
        reason: NavigationRejection,
    },
    /// A raw bridge payload posted by the page, not yet validated.
    MessageReceived { body: String },
    /// WebView was closed / destroyed.
    Closed,
}
