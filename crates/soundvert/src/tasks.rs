use core::fmt;

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};

use crate::format::Format;

/// A single conversion from a source file into the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    /// One-based position in the batch, only used for reporting.
    pub(crate) index: usize,
    pub(crate) from: Format,
    pub(crate) to: Format,
    pub(crate) from_path: PathBuf,
    pub(crate) to_path: PathBuf,
}

impl fmt::Display for Task {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "converting {} to {}", self.from, self.to)
    }
}

/// Lazily enumerated conversion tasks.
///
/// Only direct children of the source directory are considered, and only
/// regular files (or links to them) whose name ends in the source extension.
/// Hidden entries are included.
pub(crate) struct Tasks<'a> {
    walk: Option<Walk>,
    from: Format,
    to: Format,
    to_dir: &'a Path,
    index: usize,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(from_dir: &Path, from: Format, to_dir: &'a Path, to: Format) -> Self {
        // A missing source directory is an empty batch.
        let walk = from_dir.is_dir().then(|| {
            WalkBuilder::new(from_dir)
                .standard_filters(false)
                .max_depth(Some(1))
                .build()
        });

        Self {
            walk,
            from,
            to,
            to_dir,
            index: 0,
        }
    }

    fn task(&mut self, from_path: &Path) -> Option<Task> {
        let file_name = from_path.file_name()?;

        if !self.from.matches_name(file_name) || !from_path.is_file() {
            return None;
        }

        // `.mp3` has no extension to replace and becomes `.mp3.ogg`.
        let to_path = self
            .to_dir
            .join(Path::new(file_name).with_extension(self.to.ext()));

        self.index += 1;

        Some(Task {
            index: self.index,
            from: self.from,
            to: self.to,
            from_path: from_path.to_path_buf(),
            to_path,
        })
    }
}

impl Iterator for Tasks<'_> {
    type Item = Result<Task, ignore::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.as_mut()?.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };

            // The walk yields the source directory itself at depth zero.
            if entry.depth() == 0 {
                continue;
            }

            if let Some(task) = self.task(entry.path()) {
                return Some(Ok(task));
            }
        }
    }
}
