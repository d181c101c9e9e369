use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;

use crate::config::Config;
use crate::out::{Out, blank};
use crate::shell::FormatCommand;

/// Something capable of encoding a single audio file.
pub(crate) trait Encoder {
    /// Convert `from` into `to`, returning `false` if the encoder reported a
    /// failure.
    ///
    /// An error means the conversion could not be attempted at all.
    fn convert(&mut self, o: &mut Out<'_>, from: &Path, to: &Path) -> Result<bool>;
}

/// The ffmpeg audio codec used for ogg output.
const VORBIS: &str = "libvorbis";

/// Encoder which shells out to ffmpeg.
pub(crate) struct Ffmpeg {
    bin: PathBuf,
    quality: i8,
    dry_run: bool,
    verbose: bool,
}

impl Ffmpeg {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            bin: config.ffmpeg.clone(),
            quality: config.quality,
            dry_run: config.dry_run,
            verbose: config.verbose,
        }
    }

    /// Build the command converting `from` into `to`.
    ///
    /// Existing outputs are overwritten and only fatal ffmpeg messages are
    /// printed.
    pub(crate) fn command(&self, from: &Path, to: &Path) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.args(["-y", "-v", "fatal"]);
        cmd.args([OsStr::new("-i"), from.as_os_str()]);
        cmd.args(["-c:a", VORBIS]);
        cmd.arg("-q:a").arg(self.quality.to_string());
        cmd.arg(to);
        cmd
    }
}

impl Encoder for Ffmpeg {
    fn convert(&mut self, o: &mut Out<'_>, from: &Path, to: &Path) -> Result<bool> {
        let mut cmd = self.command(from, to);

        {
            let mut f = FormatCommand::new(&cmd);

            if !self.verbose {
                f.insert_replacement(self.bin.as_os_str(), "<ffmpeg>");
                f.insert_replacement(from.as_os_str(), "<from>");
                f.insert_replacement(to.as_os_str(), "<to>");
            }

            blank!(o => v, "{f}");
        }

        if self.dry_run {
            return Ok(true);
        }

        let status = cmd.status()?;
        Ok(status.success())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Ffmpeg;

    fn ffmpeg(quality: i8) -> Ffmpeg {
        Ffmpeg {
            bin: "ffmpeg".into(),
            quality,
            dry_run: false,
            verbose: false,
        }
    }

    #[test]
    fn vorbis_command_line() {
        let cmd = ffmpeg(4).command(
            Path::new("assets/sounds/a.mp3"),
            Path::new("static/sounds/a.ogg"),
        );

        assert_eq!(cmd.get_program(), "ffmpeg");

        let args = cmd
            .get_args()
            .map(|a| a.to_str().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            args,
            [
                "-y",
                "-v",
                "fatal",
                "-i",
                "assets/sounds/a.mp3",
                "-c:a",
                "libvorbis",
                "-q:a",
                "4",
                "static/sounds/a.ogg",
            ]
        );
    }

    #[test]
    fn negative_quality() {
        let cmd = ffmpeg(-1).command(Path::new("a.mp3"), Path::new("a.ogg"));
        assert!(cmd.get_args().any(|a| a == "-1"));
    }
}
