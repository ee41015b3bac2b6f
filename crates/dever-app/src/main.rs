mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use dever_config::DeverConfig;

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {}", cli::DEFAULT_LOG_DIRECTIVE);
        EnvFilter::new(cli::DEFAULT_LOG_DIRECTIVE)
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = cli::parse();

    // Config decides the log level, so it is loaded before tracing exists and
    // any failure is reported once logging is up.
    let loaded = dever_config::load_config_from(args.config.as_deref());
    let config_level = loaded.as_ref().ok().map(|c| c.logging.level.clone());
    init_tracing(cli::log_directive(
        args.log_level.as_deref(),
        config_level.as_deref(),
    ));

    tracing::info!("Dev-ER v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        DeverConfig::default()
    });
    tracing::info!(
        route = ?config.links.route,
        in_place = ?config.links.in_place,
        "config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!(error = %e, "failed to create event loop");
            std::process::exit(1);
        }
    };
    let mut app = app_state::DeverApp::new(config);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!(error = %e, "event loop error");
    }
    tracing::info!("shutdown complete");
}
