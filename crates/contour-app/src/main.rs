mod app;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use contour_config::schema::ContourConfig;

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("contour=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "contour=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Contour v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = load_initial_config(args.config.as_deref());
    tracing::info!("Config loaded ({:?} mode)", config.theme.mode);

    if args.print_config {
        println!("{}", contour_config::config_to_json(&config));
        return;
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::ContourApp::new(config, &args);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

/// Load the config from the override path if given, otherwise from the
/// default location (creating a commented template on first run).
fn load_initial_config(path_override: Option<&str>) -> ContourConfig {
    let loaded = match path_override {
        Some(path) => contour_config::toml_loader::load_from_path(std::path::Path::new(path)),
        None => contour_config::load_config(),
    };

    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ContourConfig::default()
    })
}
