mod message_kind;

pub use message_kind::*;
