pub mod errors;
pub mod navigation;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, ShellError};
pub use navigation::{normalize_host, InvalidHost, NavigationPolicy, NavigationRejection};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{MessageKind, UnknownMessageKind, MIN_MESSAGE_ID_LENGTH};

pub type Result<T> = std::result::Result<T, ShellError>;
