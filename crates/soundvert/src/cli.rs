use core::cell::Cell;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::config::Config;
use crate::encoder::{Encoder, Ffmpeg};
use crate::format::Format;
use crate::out::{Colors, Out, blank, error, info, warn};
use crate::outcome::Outcome;
use crate::shell;

const FROM_DIR: &str = "assets/sounds";
const TO_DIR: &str = "static/sounds";

/// Convert mp3 sound assets into ogg/vorbis.
#[derive(Parser)]
pub struct Soundvert {
    /// Directory to read mp3 files from. Only files directly inside of it are
    /// converted.
    #[arg(long, default_value = FROM_DIR)]
    from: PathBuf,
    /// Directory to write ogg files to. It is created if it doesn't exist.
    #[arg(short = 'o', long, default_value = TO_DIR)]
    to: PathBuf,
    /// Vorbis quality to encode with, from -1 to 10.
    #[arg(
        short = 'q',
        long,
        default_value_t = 4,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i8).range(-1..=10)
    )]
    quality: i8,
    /// Path to ffmpeg binary to use when performing conversions.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg_bin: PathBuf,
    /// If set, enables verbose output.
    #[arg(short = 'v', long)]
    verbose: bool,
    /// If set, performs a dry run without making any changes. This also implies
    /// verbose.
    #[arg(short = 'D', long)]
    dry_run: bool,
}

/// Entry for `soundvert`.
///
/// Returns a failing exit code if any conversion failed. Errors are reserved
/// for problems which prevent the batch from running at all.
pub fn entry(opts: &Soundvert) -> Result<ExitCode> {
    // Current indentation level for output.
    let indent = Cell::new(0);

    let config = Config {
        dry_run: opts.dry_run,
        ffmpeg: opts.ffmpeg_bin.clone(),
        from: Format::Mp3,
        from_dir: opts.from.clone(),
        quality: opts.quality,
        to: Format::Ogg,
        to_dir: opts.to.clone(),
        verbose: opts.verbose,
    };

    let mut encoder = Ffmpeg::new(&config);

    let cols = Colors::new();

    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let o = StandardStream::stdout(choice);
    let mut o = o.lock();
    let mut o = Out::new(config.verbose || config.dry_run, &indent, &cols, &mut o);
    let outcome = run(&mut o, &config, &mut encoder)?;
    Ok(outcome.exit_code())
}

fn run(o: &mut Out<'_>, config: &Config, encoder: &mut dyn Encoder) -> Result<Outcome> {
    config.make_dir(o)?;

    let mut outcome = Outcome::default();

    for task in config.tasks() {
        let task = match task {
            Ok(task) => task,
            Err(e) => {
                warn!(o, "{e}");
                continue;
            }
        };

        info!(o => v, "Task #{}: {task}", task.index);

        let ok = {
            let mut o = o.indent(1);
            blank!(o => v, "from : {}", shell::escape(task.from_path.as_os_str()));
            blank!(o => v, "to   : {}", shell::escape(task.to_path.as_os_str()));

            match encoder.convert(&mut o, &task.from_path, &task.to_path) {
                Ok(ok) => ok,
                Err(e) => {
                    error!(o, "{e}");
                    false
                }
            }
        };

        outcome.record(ok);

        if !ok {
            error!(o, "Failed to convert {}", task.from_path.display());
        }
    }

    info!(
        o => v,
        "Converted {} of {} file(s)",
        outcome.total - outcome.failed,
        outcome.total
    );

    Ok(outcome)
}
