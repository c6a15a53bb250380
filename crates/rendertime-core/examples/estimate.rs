//! Command-line front end for the render time calculator.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example estimate -- 24*60 1.5
//! ```
//!
//! Pin the start time instead of using the local clock:
//!
//! ```sh
//! cargo run --example estimate -- 3600 2 --now 2024-02-28T23:00:00
//! ```

use std::process;

use chrono::NaiveDateTime;
use clap::Parser;
use rendertime_core::{Clock, FixedClock, LocalClock, RenderTimeCalculator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of frames. Arithmetic such as `24*60` is allowed.
    #[arg(value_name = "FRAMES", allow_hyphen_values = true)]
    frames: String,

    /// Render time of a single frame, in seconds.
    #[arg(value_name = "SECONDS", allow_hyphen_values = true)]
    seconds: String,

    /// Start time (`YYYY-MM-DDTHH:MM:SS`). Defaults to the local time.
    #[arg(long, value_name = "DATETIME")]
    now: Option<NaiveDateTime>,
}

fn main() {
    let args = Args::parse();

    let result = match args.now {
        Some(now) => run(&FixedClock::new(now), &args),
        None => run(&LocalClock, &args),
    };
    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    }
}

fn run(clock: &dyn Clock, args: &Args) -> Result<(), String> {
    let calculator = RenderTimeCalculator::new(clock);
    let estimate = calculator
        .estimate(&args.frames, &args.seconds)
        .map_err(|err| match err.detail() {
            Some(detail) => format!("{err} ({detail})"),
            None => err.to_string(),
        })?;

    println!("Frames:            {}", estimate.frame_count());
    println!("Seconds per frame: {}", estimate.seconds_per_frame());
    println!("Total seconds:     {:.1}", estimate.total_seconds());
    println!();
    println!("{estimate}");
    Ok(())
}
