//! Bridge messages from the embedded page and the filter they pass through.
//!
//! The page posts JSON of the shape `{ "type": ..., "id": ..., "data": ... }`.
//! A message is accepted only when `type` names an enabled [`MessageKind`]
//! and `id` is a string of at least the policy's minimum length.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use webshell_common::{MessageKind, MIN_MESSAGE_ID_LENGTH};

/// A validated bridge message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Why a raw bridge payload was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeRejection {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("payload is not a JSON object")]
    NotAnObject,

    #[error("missing `type`")]
    MissingType,

    #[error("`type` is not a string")]
    TypeNotString,

    #[error("unknown message type: {0}")]
    UnknownType(String),

    #[error("message type {0} is disabled")]
    DisabledType(MessageKind),

    #[error("missing `id`")]
    MissingId,

    #[error("`id` is not a string")]
    IdNotString,

    #[error("`id` has {len} characters, at least {min} required")]
    IdTooShort { len: usize, min: usize },
}

/// Which message types are accepted and how long ids must be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgePolicy {
    enabled: BTreeSet<MessageKind>,
    min_id_length: usize,
}

impl BridgePolicy {
    /// Build a policy. `min_id_length` is raised to [`MIN_MESSAGE_ID_LENGTH`]
    /// if smaller.
    pub fn new(enabled: impl IntoIterator<Item = MessageKind>, min_id_length: usize) -> Self {
        Self {
            enabled: enabled.into_iter().collect(),
            min_id_length: min_id_length.max(MIN_MESSAGE_ID_LENGTH),
        }
    }

    pub fn is_enabled(&self, kind: MessageKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn min_id_length(&self) -> usize {
        self.min_id_length
    }

    /// Parse and validate a raw payload.
    pub fn parse(&self, raw: &str) -> Result<BridgeMessage, BridgeRejection> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| BridgeRejection::InvalidJson(e.to_string()))?;
        let Value::Object(mut fields) = value else {
            return Err(BridgeRejection::NotAnObject);
        };

        let kind = match fields.get("type") {
            None => return Err(BridgeRejection::MissingType),
            Some(Value::String(name)) => MessageKind::from_str(name)
                .map_err(|_| BridgeRejection::UnknownType(name.clone()))?,
            Some(_) => return Err(BridgeRejection::TypeNotString),
        };
        if !self.is_enabled(kind) {
            return Err(BridgeRejection::DisabledType(kind));
        }

        let id = match fields.remove("id") {
            None => return Err(BridgeRejection::MissingId),
            Some(Value::String(id)) => id,
            Some(_) => return Err(BridgeRejection::IdNotString),
        };
        let len = id.chars().count();
        if len < self.min_id_length {
            return Err(BridgeRejection::IdTooShort {
                len,
                min: self.min_id_length,
            });
        }

        let data = fields.remove("data").filter(|d| !d.is_null());

        Ok(BridgeMessage { kind, id, data })
    }
}

impl Default for BridgePolicy {
    fn default() -> Self {
        Self::new(MessageKind::ALL, MIN_MESSAGE_ID_LENGTH)
    }
}
