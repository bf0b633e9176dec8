//! WebView bridge and gatekeeper for the embedded site.
//!
//! Provides:
//! - A navigation allow-list (`https` + known hosts only)
//! - Bridge message validation and per-type dispatch
//! - An interceptor that applies both from inside WebView callbacks
//! - With the `wry` feature, a `wry` host that wires it all together

pub mod bridge;
pub mod events;
pub mod gatekeeper;
pub mod interceptor;
pub mod ipc;
#[cfg(feature = "wry")]
pub mod manager;

pub use webshell_common::navigation;

pub use bridge::{BridgeMessage, BridgePolicy, BridgeRejection, BridgeRouter, DispatchOutcome};
pub use events::{PageLoadState, WebViewEvent};
pub use gatekeeper::Gatekeeper;
pub use interceptor::Interceptor;
#[cfg(feature = "wry")]
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use navigation::{NavigationPolicy, NavigationRejection};
