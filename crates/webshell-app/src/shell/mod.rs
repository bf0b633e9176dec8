//! UI-side shell state.
//!
//! Everything the gatekeeper reports ends up here: page-load flags, blocked
//! navigations turned into one-shot alerts, and bridge payloads validated
//! and routed to the handlers in [`handlers`].

mod handlers;


use std::sync::Arc;

use tracing::{debug, info};
use webshell_common::{Notification, NotificationQueue};
use webshell_config::WebshellConfig;
use webshell_webview::{
    BridgePolicy, BridgeRouter, DispatchOutcome, Gatekeeper, NavigationPolicy, PageLoadState,
    WebViewEvent,
};

/// Build the gatekeeper described by `config`.
pub fn gatekeeper_from_config(config: &WebshellConfig) -> Gatekeeper {
    Gatekeeper::new(
        NavigationPolicy::new(&config.navigation.allowed_hosts),
        BridgePolicy::new(
            config.bridge.enabled_types.iter().copied(),
            config.bridge.min_id_length as usize,
        ),
    )
}

/// State bridge handlers may touch.
#[derive(Debug, Default)]
pub struct ShellContext {
    pub notifications: NotificationQueue,
    pub loading: bool,
    pub current_url: Option<String>,
    pub closed: bool,
}

#[derive(Debug)]
pub struct ShellState {
    gate: Arc<Gatekeeper>,
    router: BridgeRouter<ShellContext>,
    ctx: ShellContext,
    alert_on_block: bool,
}

impl ShellState {
    /// Create shell state with the default handlers registered.
    pub fn new(gate: Arc<Gatekeeper>, alert_on_block: bool) -> Self {
        let mut router = BridgeRouter::new();
        handlers::register_defaults(&mut router);
        Self {
            gate,
            router,
            ctx: ShellContext::default(),
            alert_on_block,
        }
    }

    pub fn from_config(config: &WebshellConfig) -> Self {
        Self::new(
            Arc::new(gatekeeper_from_config(config)),
            config.navigation.alert_on_block,
        )
    }

    /// The gatekeeper, shared with the WebView callbacks.
    pub fn gatekeeper(&self) -> Arc<Gatekeeper> {
        Arc::clone(&self.gate)
    }

    pub fn router_mut(&mut self) -> &mut BridgeRouter<ShellContext> {
        &mut self.router
    }

    pub fn context(&self) -> &ShellContext {
        &self.ctx
    }

    /// Apply drained WebView events in order. Returns the outcome of every
    /// bridge payload among them.
    pub fn process_events(&mut self, events: Vec<WebViewEvent>) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::new();
        for event in events {
            match event {
                WebViewEvent::PageLoad { state, url } => {
                    self.ctx.loading = state == PageLoadState::Started;
                    debug!(?state, url = %url, "page load state");
                    self.ctx.current_url = Some(url);
                }
                WebViewEvent::NavigationBlocked { url, reason } => {
                    if self.alert_on_block {
                        self.ctx.notifications.push(Notification::warning(
                            "Navigation blocked",
                            format!("{url} cannot be opened in this app ({reason})."),
                        ));
                    }
                }
                WebViewEvent::MessageReceived { body } => {
                    let outcome =
                        self.gate
                            .validate_and_dispatch(&body, &mut self.router, &mut self.ctx);
                    outcomes.push(outcome);
                }
                WebViewEvent::Closed => {
                    info!("WebView closed");
                    self.ctx.closed = true;
                    self.ctx.loading = false;
                }
            }
        }
        outcomes
    }

    /// Next notification to show the user, if any.
    pub fn next_notification(&mut self) -> Option<Notification> {
        self.ctx.notifications.pop()
    }
}
