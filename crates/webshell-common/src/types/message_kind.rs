use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest `id` a bridge message may carry.
pub const MIN_MESSAGE_ID_LENGTH: usize = 10;

/// The fixed set of bridge message types the embedded page may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    GetLocation,
    TakePhoto,
    ShowNotification,
    SaveFile,
    GetUserInfo,
}

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        MessageKind::GetLocation,
        MessageKind::TakePhoto,
        MessageKind::ShowNotification,
        MessageKind::SaveFile,
        MessageKind::GetUserInfo,
    ];

    /// Name used on the wire (the `type` field of a bridge message).
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::GetLocation => "getLocation",
            MessageKind::TakePhoto => "takePhoto",
            MessageKind::ShowNotification => "showNotification",
            MessageKind::SaveFile => "saveFile",
            MessageKind::GetUserInfo => "getUserInfo",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type: {0}")]
pub struct UnknownMessageKind(pub String);

impl FromStr for MessageKind {
    type Err = UnknownMessageKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownMessageKind(s.to_string()))
    }
}
