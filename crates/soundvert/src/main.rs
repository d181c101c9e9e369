//! Convert a directory of mp3 sound assets into ogg/vorbis.
//!
//! See [`soundvert`] documentation for more information.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

const VERSION: &str = match option_env!("SOUNDVERT_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Convert mp3 sound assets into ogg/vorbis.
#[derive(Parser)]
#[command(about, max_term_width = 80, version = VERSION)]
pub struct Opts {
    #[command(flatten)]
    inner: soundvert::Soundvert,
}

fn main() -> Result<ExitCode> {
    let opts = Opts::parse();
    soundvert::entry(&opts.inner)
}
