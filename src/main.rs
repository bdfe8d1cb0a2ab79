use std::process;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod chrome;
mod config;
mod constants;
mod deck;
mod input;
mod navigator;
mod platform;
mod presenter;
mod render;
mod slide;
mod state;
mod texture_loader;

use crate::chrome::{Chrome, ChromeLayout};
use crate::config::Config;
use crate::deck::load_deck;
use crate::platform::{poll_events, RaylibWindow};
use crate::presenter::Presenter;
use crate::slide::SlideView;
use crate::texture_loader::load_texture_with_exif_rotation;

fn main() {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(config) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    // --- Load Deck ---
    let deck = load_deck(&config.deck)?;
    info!(path = %config.deck.display(), slides = deck.len(), "deck loaded");

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Deck Presenter")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape leaves fullscreen instead of closing the window
    rl.set_exit_key(None);

    // --- Slide Views ---
    let mut views: Vec<SlideView> = Vec::with_capacity(deck.len());
    for slide in deck.slides() {
        let image = match &slide.image {
            Some(path) => match load_texture_with_exif_rotation(&mut rl, &thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(slide = slide.position, "showing slide without its image: {e:#}");
                    None
                }
            },
            None => None,
        };
        views.push(SlideView::new(slide.clone(), image));
    }

    let mut presenter = Presenter::new(deck, Chrome::new());
    if config.fullscreen {
        presenter.navigator_mut().observer_mut().fullscreen.enter(&mut RaylibWindow::new(&mut rl));
    }
    if let Some(start) = config.start {
        presenter.navigator_mut().go_to(start);
    }

    // Initial placement without animation
    for (view, state) in views.iter_mut().zip(presenter.navigator().states()) {
        view.retarget(*state, false);
    }

    // --- Main Loop ---
    while !presenter.should_quit() {
        let dt = rl.get_frame_time();
        let layout = ChromeLayout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        // 1. Route input
        for event in poll_events(&rl) {
            presenter.handle(event, &layout, &mut RaylibWindow::new(&mut rl));
        }
        presenter.navigator_mut().observer_mut().fullscreen.sync(&RaylibWindow::new(&mut rl));

        // 2. Follow the navigator with the views
        for (view, state) in views.iter_mut().zip(presenter.navigator().states()) {
            view.retarget(*state, true);
            view.update(dt);
        }

        // 3. Draw
        let mut d = rl.begin_drawing(&thread);
        render::draw_frame(&mut d, &presenter, &views, &layout);
    }

    let slide = presenter.navigator().slide_info();
    info!(current = slide.current, total = slide.total, title = %slide.title, "presentation closed");
    Ok(())
}
