//! Bridge message filter configuration.

use serde::{Deserialize, Serialize};
use webshell_common::MessageKind;

/// Which message types the page may send and how long ids must be.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub enabled_types: Vec<MessageKind>,
    /// Valid range: 10-128.
    pub min_id_length: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled_types: MessageKind::ALL.to_vec(),
            min_id_length: webshell_common::MIN_MESSAGE_ID_LENGTH as u32,
        }
    }
}
