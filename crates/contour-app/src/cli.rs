use clap::Parser;

/// Contour, an animated GPU contour-line background that follows the
/// desktop theme.
#[derive(Parser, Debug)]
#[command(name = "contour", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start fullscreen regardless of the configured startup mode.
    #[arg(long)]
    pub fullscreen: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
