//! Terminal front end: play against the greedy engine.
//!
//! Run with:
//! `cargo run --release -- [--black] [--seed N] [--delay-ms N] [--quiet]`

use mailbox_chess::play::play_top::{run_stdio_loop, PlayConfig};

fn main() -> Result<(), String> {
    let config = PlayConfig::from_args(std::env::args().skip(1))?;
    run_stdio_loop(config).map_err(|e| e.to_string())
}
