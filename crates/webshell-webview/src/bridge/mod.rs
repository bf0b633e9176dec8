//! Bridge between the embedded page and the host.
//!
//! `message` holds the wire shape and the filter every payload passes;
//! `router` maps accepted messages to host handlers.

mod message;
mod router;


pub use message::{BridgeMessage, BridgePolicy, BridgeRejection};
pub use router::{BridgeRouter, DispatchOutcome};
