//! Headless stand-in for the editor's render loop.

use blip_config::{config_to_json, EditorConfig, ReloadManager};
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// Write the snapshot as one pretty-printed JSON document.
pub fn write_state(out: &mut impl Write, config: &EditorConfig) -> io::Result<()> {
    writeln!(out, "{}", config_to_json(config))?;
    out.flush()
}

pub struct FrameLoop {
    interval: Duration,
    max_frames: Option<u64>,
    print_state: bool,
}

impl FrameLoop {
    pub fn new(interval: Duration, max_frames: Option<u64>, print_state: bool) -> Self {
        Self {
            interval,
            max_frames,
            print_state,
        }
    }

    /// Tick `reload` once per frame until the frame budget runs out.
    /// Returns the number of frames run, or the error from printing state.
    pub fn run(&self, reload: &mut ReloadManager) -> io::Result<u64> {
        let mut frame = 0;
        while self.max_frames.map_or(true, |max| frame < max) {
            let started = Instant::now();

            if reload.tick() {
                let config = reload.config();
                info!(
                    generation = reload.generation(),
                    font_size = config.font.size,
                    ui_scale = config.ui.ui_scale,
                    "config applied"
                );
                if self.print_state {
                    write_state(&mut io::stdout().lock(), &config)?;
                }
            }

            frame += 1;
            if let Some(rest) = self.interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
        Ok(frame)
    }
}
