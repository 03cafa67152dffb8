use blip_config::BackendKind;
use clap::Parser;

/// Blip: a text editor shell that follows its config file as it changes.
#[derive(Parser, Debug)]
#[command(name = "blip", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// File watch backend (native or portable).
    #[arg(long, default_value = "native")]
    pub backend: BackendKind,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Exit after this many frames instead of running until killed.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Print the config as JSON at startup and after every reload.
    #[arg(long)]
    pub print_state: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
