mod cli;
mod frame_loop;

use blip_common::BlipError;
use blip_config::{ini_loader, ReloadManager, WatchOptions};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "blip_app=info,blip_config=info";

/// `--log-level` wins over `RUST_LOG`; anything unparsable falls back to
/// info for the blip crates.
fn log_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn init_logging(level: Option<&str>) {
    tracing_subscriber::fmt().with_env_filter(log_filter(level)).init();
}

/// The `--config` override, or the platform default with a template
/// written there on first run.
fn resolve_config_path(arg: Option<&str>) -> Result<PathBuf, BlipError> {
    if let Some(path) = arg {
        return Ok(PathBuf::from(path));
    }
    let path = ini_loader::default_config_path()?;
    if !path.exists() {
        ini_loader::create_default_config(&path)?;
    }
    Ok(path)
}

fn run(args: cli::Args) -> Result<(), BlipError> {
    let config_path = resolve_config_path(args.config.as_deref())?;
    info!("using config {}", config_path.display());

    let options = WatchOptions {
        backend: args.backend,
        ..WatchOptions::default()
    };
    let mut reload = ReloadManager::start_with_options(&config_path, options);
    if args.print_state {
        frame_loop::write_state(&mut io::stdout().lock(), &reload.config())?;
    }

    let frames = frame_loop::FrameLoop::new(
        Duration::from_millis(args.frame_ms.max(1)),
        args.frames,
        args.print_state,
    )
    .run(&mut reload)?;

    reload.stop();
    info!(frames, reloads = reload.generation(), "shutting down");
    Ok(())
}

fn main() {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_becomes_the_filter() {
        let filter = log_filter(Some("blip_config=debug"));
        assert!(filter.to_string().contains("blip_config=debug"));
    }

    #[test]
    fn unparsable_log_level_falls_back_to_info() {
        let filter = log_filter(Some("blip_config=loud"));
        let shown = filter.to_string();
        assert!(shown.contains("blip_config=info"), "{shown}");
        assert!(shown.contains("blip_app=info"), "{shown}");
    }

    #[test]
    fn explicit_config_path_is_used_as_is() {
        let path = resolve_config_path(Some("/tmp/blip-explicit.ini")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/blip-explicit.ini"));
    }
}
