use core::fmt;

use std::ffi::OsStr;

/// An audio format handled by the batch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Mp3,
    Ogg,
}

impl Format {
    /// The file extension, without the leading dot.
    pub(crate) fn ext(&self) -> &'static str {
        match self {
            Format::Mp3 => "mp3",
            Format::Ogg => "ogg",
        }
    }

    /// Test if a file name ends in `.<ext>`.
    ///
    /// The comparison is case-sensitive and dotfiles match, so both
    /// `.click.mp3` and `.mp3` are mp3 files while `a.MP3` is not.
    pub(crate) fn matches_name(&self, name: &OsStr) -> bool {
        let Some(stem) = name.as_encoded_bytes().strip_suffix(self.ext().as_bytes()) else {
            return false;
        };

        stem.ends_with(b".")
    }
}

impl fmt::Display for Format {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}
