//! Convert a directory of mp3 sound assets into ogg/vorbis.
//!
//! Every `.mp3` file directly inside of the source directory is handed to
//! `ffmpeg` and written with the same name and an `.ogg` extension into the
//! destination directory, which is created if it's missing. Subdirectories
//! are not traversed.
//!
//! A failing conversion is reported as `Failed to convert <path>` and the
//! batch moves on to the next file. Once all files have been processed the
//! tool exits with status `1` if anything failed, and `0` otherwise.
//!
//! <br>
//!
//! ## Usage
//!
//! Without arguments, files are read from `assets/sounds` and written to
//! `static/sounds`, relative to the current directory:
//!
//! ```sh
//! soundvert
//! ```
//!
//! Use `--dry-run` or `-D` to see what would be done without running
//! anything:
//!
//! ```sh
//! soundvert --dry-run --from sfx --to public/sfx
//! ```

mod cli;
mod config;
mod encoder;
mod format;
mod out;
mod outcome;
mod shell;
mod tasks;

pub use self::cli::{Soundvert, entry};
