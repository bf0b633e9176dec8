//! Per-type dispatch of accepted bridge messages.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;
use webshell_common::MessageKind;

use super::message::{BridgeMessage, BridgeRejection};

type Handler<C> = Box<dyn FnMut(&mut C, &BridgeMessage)>;

/// What happened to one inbound payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// A handler ran.
    Handled(MessageKind),
    /// The message was valid but no handler is registered for its type.
    Unhandled(MessageKind),
    /// The payload failed validation and was dropped.
    Rejected(BridgeRejection),
}

/// Routes each accepted message to the handler registered for its type.
///
/// `C` is the host state handlers operate on.
pub struct BridgeRouter<C> {
    handlers: HashMap<MessageKind, Handler<C>>,
}

impl<C> BridgeRouter<C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register the handler for `kind`, replacing any previous one.
    pub fn on<F>(&mut self, kind: MessageKind, handler: F) -> &mut Self
    where
        F: FnMut(&mut C, &BridgeMessage) + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    pub fn handles(&self, kind: MessageKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Run the handler for `message.kind`, if any. At most one handler runs.
    pub fn dispatch(&mut self, ctx: &mut C, message: &BridgeMessage) -> DispatchOutcome {
        match self.handlers.get_mut(&message.kind) {
            Some(handler) => {
                debug!(kind = %message.kind, id = %message.id, "bridge message dispatched");
                handler(ctx, message);
                DispatchOutcome::Handled(message.kind)
            }
            None => {
                debug!(
                    kind = %message.kind,
                    id = %message.id,
                    "bridge message dropped: no handler for type"
                );
                DispatchOutcome::Unhandled(message.kind)
            }
        }
    }
}

impl<C> Default for BridgeRouter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for BridgeRouter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().collect();
        kinds.sort();
        f.debug_struct("BridgeRouter").field("handlers", &kinds).finish()
    }
}
