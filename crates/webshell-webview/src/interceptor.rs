//! Callback-side glue between the WebView runtime and the gatekeeper.
//!
//! WebView callbacks run on the UI thread and must return quickly. The
//! interceptor answers navigation requests on the spot and records
//! everything else as [`WebViewEvent`]s for the host's event loop to drain.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use crate::events::{PageLoadState, WebViewEvent};
use crate::gatekeeper::Gatekeeper;

#[derive(Debug, Clone)]
pub struct Interceptor {
    gate: Arc<Gatekeeper>,
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl Interceptor {
    pub fn new(gate: Arc<Gatekeeper>) -> Self {
        Self {
            gate,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn gatekeeper(&self) -> &Gatekeeper {
        &self.gate
    }

    /// Navigation-intercept hook. Returns whether the load may proceed;
    /// blocked URLs are logged and recorded.
    pub fn intercept_navigation(&self, url: &str) -> bool {
        match self.gate.check_navigation(url) {
            Ok(_) => {
                debug!(url = %url, "navigation allowed");
                true
            }
            Err(reason) => {
                warn!(url = %url, %reason, "navigation blocked");
                self.push(WebViewEvent::NavigationBlocked {
                    url: url.to_string(),
                    reason,
                });
                false
            }
        }
    }

    /// New-window hook (`target="_blank"`, `window.open`). Always returns
    /// false: the shell never opens a second window. The target still goes
    /// through the gate so blocked targets are logged and recorded.
    pub fn intercept_new_window(&self, url: &str) -> bool {
        if self.intercept_navigation(url) {
            debug!(url = %url, "new window suppressed");
        }
        false
    }

    /// Message-received hook. The payload is queued as-is; validation
    /// happens when the host dispatches it.
    pub fn receive_message(&self, body: String) {
        debug!(body_len = body.len(), "bridge payload from page");
        self.push(WebViewEvent::MessageReceived { body });
    }

    pub fn page_load(&self, state: PageLoadState, url: String) {
        debug!(?state, url = %url, "page load");
        self.push(WebViewEvent::PageLoad { state, url });
    }

    pub fn closed(&self) {
        self.push(WebViewEvent::Closed);
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }

    fn push(&self, event: WebViewEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationRejection;

    fn interceptor() -> Interceptor {
        Interceptor::new(Arc::new(Gatekeeper::default()))
    }

    #[test]
    fn allowed_navigation_records_nothing() {
        let i = interceptor();
        assert!(i.intercept_navigation("https://www.example.com/page"));
        assert!(i.drain_events().is_empty());
    }

    #[test]
    fn blocked_navigation_is_recorded_with_reason() {
        let i = interceptor();
        assert!(!i.intercept_navigation("http://www.example.com"));
        assert!(!i.intercept_navigation("https://evil.com"));

        let events = i.drain_events();
        assert_eq!(
            events,
            vec![
                WebViewEvent::NavigationBlocked {
                    url: "http://www.example.com".into(),
                    reason: NavigationRejection::DisallowedScheme("http".into()),
                },
                WebViewEvent::NavigationBlocked {
                    url: "https://evil.com".into(),
                    reason: NavigationRejection::DisallowedHost("evil.com".into()),
                },
            ]
        );
    }

    #[test]
    fn events_keep_arrival_order_and_drain_empties() {
        let i = interceptor();
        i.page_load(PageLoadState::Started, "https://www.example.com".into());
        i.receive_message(r#"{"type":"getLocation","id":"abcdefghij"}"#.into());
        i.page_load(PageLoadState::Finished, "https://www.example.com".into());
        i.closed();

        let events = i.drain_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            WebViewEvent::PageLoad {
                state: PageLoadState::Started,
                ..
            }
        ));
        assert!(matches!(events[1], WebViewEvent::MessageReceived { .. }));
        assert_eq!(events[3], WebViewEvent::Closed);
        assert!(i.drain_events().is_empty());
    }

    #[test]
    fn new_windows_are_never_opened() {
        let i = interceptor();
        assert!(!i.intercept_new_window("https://www.example.com/terms"));
        assert!(i.drain_events().is_empty());

        assert!(!i.intercept_new_window("http://evil.com"));
        assert_eq!(
            i.drain_events(),
            vec![WebViewEvent::NavigationBlocked {
                url: "http://evil.com".into(),
                reason: NavigationRejection::DisallowedScheme("http".into()),
            }]
        );
    }

    #[test]
    fn events_survive_a_poisoned_queue() {
        let i = interceptor();
        let events = Arc::clone(&i.events);
        let _ = std::thread::spawn(move || {
            let _guard = events.lock().unwrap();
            panic!("handler panicked while holding the queue");
        })
        .join();
        assert!(i.events.is_poisoned());

        assert!(!i.intercept_navigation("https://evil.com"));
        i.receive_message("{}".into());
        assert_eq!(i.drain_events().len(), 2);
    }

    #[test]
    fn clones_share_one_event_queue() {
        let i = interceptor();
        let for_callback = i.clone();
        for_callback.receive_message("{}".into());
        assert_eq!(i.drain_events().len(), 1);
    }
}
