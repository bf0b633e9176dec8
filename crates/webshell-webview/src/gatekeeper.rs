//! The gatekeeper: one place that decides what the embedded page may do.
//!
//! Both checks are stateless and run synchronously per event. Rejections
//! fail closed and are logged; nothing is reported back to the page.

use tracing::warn;
use url::Url;

use crate::bridge::{BridgeMessage, BridgePolicy, BridgeRejection, BridgeRouter, DispatchOutcome};
use crate::navigation::{NavigationPolicy, NavigationRejection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gatekeeper {
    navigation: NavigationPolicy,
    bridge: BridgePolicy,
}

impl Gatekeeper {
    pub fn new(navigation: NavigationPolicy, bridge: BridgePolicy) -> Self {
        Self { navigation, bridge }
    }

    pub fn navigation(&self) -> &NavigationPolicy {
        &self.navigation
    }

    pub fn bridge(&self) -> &BridgePolicy {
        &self.bridge
    }

    /// Whether a navigation to `url` may proceed. Pure predicate.
    pub fn validate_navigation(&self, url: &str) -> bool {
        self.navigation.validate(url)
    }

    /// Like [`validate_navigation`](Self::validate_navigation) but keeps the reason.
    pub fn check_navigation(&self, url: &str) -> Result<Url, NavigationRejection> {
        self.navigation.check(url)
    }

    /// Parse and validate a raw bridge payload.
    pub fn validate_message(&self, raw: &str) -> Result<BridgeMessage, BridgeRejection> {
        self.bridge.parse(raw)
    }

    /// Validate `raw` and, if accepted, route it to exactly one handler.
    ///
    /// Rejected payloads are logged and never reach `router`.
    pub fn validate_and_dispatch<C>(
        &self,
        raw: &str,
        router: &mut BridgeRouter<C>,
        ctx: &mut C,
    ) -> DispatchOutcome {
        match self.validate_message(raw) {
            Ok(message) => router.dispatch(ctx, &message),
            Err(reason) => {
                warn!(body_len = raw.len(), %reason, "bridge message rejected");
                DispatchOutcome::Rejected(reason)
            }
        }
    }
}
