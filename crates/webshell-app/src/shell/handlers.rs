//! Default bridge handlers for the desktop host.
//!
//! Only `showNotification` has a desktop counterpart. The permission-backed
//! kinds (`getLocation`, `takePhoto`, `saveFile`, `getUserInfo`) stay
//! unregistered and are dropped by the router.

use serde_json::Value;
use tracing::warn;
use webshell_common::{MessageKind, Notification};
use webshell_webview::{BridgeMessage, BridgeRouter};

use super::ShellContext;

const DEFAULT_TITLE: &str = "Notification";

pub(super) fn register_defaults(router: &mut BridgeRouter<ShellContext>) {
    router.on(MessageKind::ShowNotification, show_notification);
}

/// `data: { title?, body?, level? }` -> an in-app notification.
fn show_notification(ctx: &mut ShellContext, message: &BridgeMessage) {
    let Some(notification) = notification_from_data(message.data.as_ref()) else {
        warn!(id = %message.id, "showNotification without title or body, ignored");
        return;
    };
    ctx.notifications.push(notification);
}

fn notification_from_data(data: Option<&Value>) -> Option<Notification> {
    let data = data?;
    let title = text(data, "title").filter(|t| !t.is_empty());
    let body = text(data, "body").unwrap_or_default();
    if title.is_none() && body.is_empty() {
        return None;
    }
    let title = title.unwrap_or(DEFAULT_TITLE);

    Some(match text(data, "level") {
        Some("warning") => Notification::warning(title, body),
        Some("error") => Notification::error(title, body),
        _ => Notification::info(title, body),
    })
}

fn text<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str).map(str::trim)
}
