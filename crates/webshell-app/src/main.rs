mod app;

use webshell_app::{cli, logging, ShellState};
use webshell_common::ShellError;
use winit::event_loop::EventLoop;

fn main() -> webshell_common::Result<()> {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let loaded = webshell_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    logging::init(&logging::directive(args.log_level.as_deref(), level));

    tracing::info!("WebShell v{} starting...", env!("CARGO_PKG_VERSION"));

    // An explicit --config must load; the default location falls back.
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return Err(e.into());
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            webshell_config::WebshellConfig::default()
        }
    };
    if let Some(url) = args.url {
        tracing::info!("Using start URL override: {url}");
        config.shell.start_url = url;
    }
    tracing::info!(
        "Navigation allow-list: {}",
        config.navigation.allowed_hosts.join(", ")
    );

    let shell = ShellState::from_config(&config);

    let event_loop = EventLoop::new().map_err(|e| ShellError::Other(format!("event loop: {e}")))?;
    let mut app = app::ShellApp::new(config, shell);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| ShellError::Other(format!("event loop: {e}")))?;
    tracing::info!("Shutdown complete");
    Ok(())
}
