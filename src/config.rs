use std::path::PathBuf;
use clap::Parser;
use crate::constants::*;

/// Present a slide deck in a native window.
#[derive(Parser, Debug)]
#[command(name = "deck-presenter", version, about)]
pub struct Config {
    /// Deck markup file
    pub deck: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Start in fullscreen
    #[arg(long)]
    pub fullscreen: bool,

    /// Slide to open on (1-based); out-of-range values are ignored
    #[arg(long)]
    pub start: Option<i64>,
}
