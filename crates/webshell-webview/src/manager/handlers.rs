use tracing::warn;
use wry::WebViewBuilder;

use crate::events::PageLoadState;
use crate::interceptor::Interceptor;

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    interceptor: Interceptor,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        if body.is_empty() {
            warn!("bridge payload rejected: empty body");
            return;
        }
        interceptor.receive_message(body.clone());
    })
}

pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    interceptor: Interceptor,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| interceptor.intercept_navigation(&url))
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    interceptor: Interceptor,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        interceptor.page_load(PageLoadState::from(event), url);
    })
}

/// The shell is a single window, so popups are never opened. A blocked
/// target is recorded like any other blocked navigation.
pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    interceptor: Interceptor,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| interceptor.intercept_new_window(&url))
}
