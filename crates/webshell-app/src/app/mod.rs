//! `ApplicationHandler` implementation for the winit event loop.
//!
//! One window, one WebView. WebView callbacks only record events; they are
//! drained and applied to [`ShellState`] on every loop wakeup.

use std::time::{Duration, Instant};

use webshell_app::ShellState;
use webshell_config::WebshellConfig;
use webshell_webview::{WebViewConfig, WebViewHandle, WebViewManager};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

/// How often pending WebView events are drained while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct ShellApp {
    config: WebshellConfig,
    shell: ShellState,
    manager: WebViewManager,
    // Dropped before the window it is attached to.
    webview: Option<WebViewHandle>,
    window: Option<Window>,
}

impl ShellApp {
    pub fn new(config: WebshellConfig, shell: ShellState) -> Self {
        let manager = WebViewManager::new(shell.gatekeeper());
        Self {
            config,
            shell,
            manager,
            webview: None,
            window: None,
        }
    }

    fn webview_config(&self) -> WebViewConfig {
        let shell = &self.config.shell;
        WebViewConfig {
            url: shell.start_url.clone(),
            user_agent: Some(shell.user_agent.clone()),
            devtools: shell.devtools || cfg!(debug_assertions),
            back_forward_gestures: shell.back_forward_gestures,
        }
    }

    /// Create the window and its WebView. Returns false on failure.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attributes = Window::default_attributes().with_title(&self.config.shell.window_title);
        let window = match event_loop.create_window(attributes) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        match self
            .manager
            .create(&window, (size.width, size.height), self.webview_config())
        {
            Ok(handle) => self.webview = Some(handle),
            Err(e) => {
                tracing::error!("Failed to create WebView: {e}");
                return false;
            }
        }
        self.window = Some(window);
        true
    }

    /// Apply recorded WebView events and show pending notifications.
    fn pump(&mut self) {
        let events = self.manager.drain_events();
        if !events.is_empty() {
            self.shell.process_events(events);
        }

        let Some(handle) = &self.webview else {
            return;
        };
        while let Some(notification) = self.shell.next_notification() {
            if let Err(e) = handle.show_alert(&notification) {
                tracing::warn!(title = %notification.title, "Failed to show alert: {e}");
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.webview.take() {
            handle.close();
        }
        self.pump();
        self.window = None;
    }
}

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(handle) = &self.webview {
                        if let Err(e) = handle.fill(size.width, size.height) {
                            tracing::warn!("Failed to resize WebView: {e}");
                        }
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.pump();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }
}
