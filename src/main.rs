#![warn(clippy::all)]

mod fps_limit;

use std::io::{self, Write};

use fps_limit::FpsLimiter;
use gol_grid::TorusField;

const DEFAULT_WIDTH: usize = 164;
const DEFAULT_HEIGHT: usize = 48;
const DEFAULT_MAX_FPS: f64 = 30.;

/// Reference host for the engine: builds a field, then calls `render` and
/// `tick` once per frame, forever, painting the snapshot to the terminal.
///
/// Usage: `gol_grid [WIDTH HEIGHT [MAX_FPS]]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let width = match args.first() {
        Some(s) => s.parse()?,
        None => DEFAULT_WIDTH,
    };
    let height = match args.get(1) {
        Some(s) => s.parse()?,
        None => DEFAULT_HEIGHT,
    };
    let max_fps = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_MAX_FPS,
    };

    let mut field = TorusField::new(width, height)?;
    log::info!(
        "running a {}x{} field, population {}, capped at {} fps",
        width,
        height,
        field.population(),
        max_fps
    );

    let mut limiter = FpsLimiter::new(max_fps);
    let mut stdout = io::stdout();
    // clear once, then repaint from the home position each frame
    write!(stdout, "\x1b[2J")?;
    loop {
        write!(stdout, "\x1b[H{}", field)?;
        stdout.flush()?;
        field.tick();
        limiter.delay();
        log::trace!(
            "generation {}, population {}, {:.1} fps",
            field.generation(),
            field.population(),
            limiter.fps()
        );
    }
}
