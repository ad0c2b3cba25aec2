//! Replays scripted drag gestures against an in-memory host and logs every
//! state the carousel produces.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example replay
//! ```

use anyhow::{Context, Result, ensure};
use swipeboard::input::RawPointerInput;
use swipeboard::logging::init_tracing;
use swipeboard::{Carousel, CarouselConfig, StaticHost, TransformLog};
use tracing::info;

const PANELS: usize = 3;
const WIDTH: f32 = 300.0;

fn mouse(page_x: f32) -> RawPointerInput {
    RawPointerInput::Mouse { page_x }
}

fn drag(carousel: &Carousel<TransformLog>, from: f32, to: f32) {
    carousel.dispatch("mousedown", &mouse(from));
    let step = (to - from) / 4.0;
    for i in 1..=4 {
        carousel.dispatch("mousemove", &mouse(from + step * i as f32));
    }
    carousel.dispatch("mouseup", &mouse(to));
}

fn main() -> Result<()> {
    init_tracing("info,swipeboard=debug");

    let host = StaticHost::new("carousel", WIDTH, PANELS);
    let carousel = Carousel::mount(&host, TransformLog::new(), CarouselConfig::default())
        .context("mounting carousel")?;
    let _log = carousel.subscribe_states(|state| info!(?state, "rendered"));

    info!("swipe left past the threshold");
    drag(&carousel, 200.0, 150.0);
    ensure!(carousel.state().panel_index == 1, "expected panel 1");

    info!("small drag snaps back");
    drag(&carousel, 200.0, 190.0);
    ensure!(carousel.state().panel_index == 1, "expected to stay on panel 1");

    info!("swipe to the last panel, then past it");
    drag(&carousel, 200.0, 100.0);
    drag(&carousel, 200.0, 100.0);
    ensure!(carousel.state().panel_index == PANELS - 1, "expected last panel");

    info!("resize, then swipe back right");
    carousel.resize(400.0);
    drag(&carousel, 100.0, 160.0);
    let state = carousel.state();
    ensure!(state.panel_index == 1 && state.current_offset == -400.0, "unexpected {state:?}");

    info!(
        writes = carousel.sink().writes().len(),
        transform = carousel.sink().current().unwrap_or("none"),
        "replay finished"
    );
    Ok(())
}
