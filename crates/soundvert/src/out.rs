use core::cell::Cell;
use core::fmt;

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

/// Write a line through [`Out`].
///
/// The `o => v` form only writes when verbose output is enabled.
macro_rules! __log {
    ($log:ident, $o:ident => v $(, $($tt:tt)*)?) => {
        if $o.is_verbose() {
            $( $o.$log(format_args!($($tt)*))?; )?
        }
    };

    ($log:ident, $o:ident $(, $($tt:tt)*)?) => {
        $( $o.$log(format_args!($($tt)*))?; )?
    };
}

pub(crate) use __log;

macro_rules! __blank { ($($tt:tt)*) => { $crate::out::__log!(blank, $($tt)*) }; }
macro_rules! __info { ($($tt:tt)*) => { $crate::out::__log!(info, $($tt)*) }; }
macro_rules! __warn { ($($tt:tt)*) => { $crate::out::__log!(warn, $($tt)*) }; }
macro_rules! __error { ($($tt:tt)*) => { $crate::out::__log!(error, $($tt)*) }; }

pub(crate) use __blank as blank;
pub(crate) use __error as error;
pub(crate) use __info as info;
pub(crate) use __warn as warn;

pub(crate) struct Colors {
    info: ColorSpec,
    warn: ColorSpec,
    error: ColorSpec,
}

impl Colors {
    pub(crate) fn new() -> Self {
        Colors {
            info: bold(Color::Green),
            warn: bold(Color::Yellow),
            error: bold(Color::Red),
        }
    }
}

fn bold(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}

/// Indented console output.
///
/// Indentation is shared through a [`Cell`] so that nested scopes created
/// with [`Out::indent`] restore the previous level when dropped.
pub(crate) struct Out<'a> {
    verbose: bool,
    change: isize,
    indent: &'a Cell<usize>,
    c: &'a Colors,
    o: &'a mut dyn WriteColor,
}

impl Out<'_> {
    pub(crate) fn new<'a>(
        verbose: bool,
        indent: &'a Cell<usize>,
        c: &'a Colors,
        o: &'a mut dyn WriteColor,
    ) -> Out<'a> {
        Out {
            verbose,
            change: 0,
            indent,
            c,
            o,
        }
    }
}

impl<'a> Out<'a> {
    #[inline]
    pub(crate) fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub(crate) fn indent(&mut self, change: isize) -> Out<'_> {
        let indent = self.indent.get().saturating_add_signed(change);
        self.indent.set(indent);

        Out {
            verbose: self.verbose,
            change,
            indent: self.indent,
            c: self.c,
            o: self.o,
        }
    }

    pub(crate) fn blank(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        writeln!(self.o, "{m}")?;
        self.o.flush()
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.colorize(&self.c.info, m)
    }

    pub(crate) fn warn(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.colorize(&self.c.warn, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.colorize(&self.c.error, m)
    }

    fn prefix(&mut self) -> io::Result<()> {
        for _ in 0..self.indent.get() {
            self.o.write_all(b"  ")?;
        }

        Ok(())
    }

    fn colorize(&mut self, c: &ColorSpec, m: impl fmt::Display) -> io::Result<()> {
        self.prefix()?;
        self.o.set_color(c)?;
        write!(self.o, "{m}")?;
        self.o.reset()?;
        writeln!(self.o)?;
        self.o.flush()
    }
}

impl Drop for Out<'_> {
    #[inline]
    fn drop(&mut self) {
        let indent = self.indent.get().saturating_sub_signed(self.change);
        self.indent.set(indent);
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use termcolor::NoColor;

    use super::{Colors, Out, blank, error, info};

    fn render(verbose: bool, f: impl FnOnce(&mut Out<'_>) -> std::io::Result<()>) -> String {
        let indent = Cell::new(0);
        let cols = Colors::new();
        let mut buf = NoColor::new(Vec::new());

        {
            let mut o = Out::new(verbose, &indent, &cols, &mut buf);
            f(&mut o).unwrap();
        }

        assert_eq!(indent.get(), 0, "indentation must be restored");
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn nested_indentation() {
        let out = render(false, |o| {
            info!(o, "top");
            let mut o = o.indent(1);
            blank!(o, "nested");
            Ok(())
        });

        assert_eq!(out, "top\n  nested\n");
    }

    #[test]
    fn verbose_only_lines() {
        let emit = |o: &mut Out<'_>| {
            info!(o => v, "hidden unless verbose");
            error!(o, "always");
            Ok(())
        };

        assert_eq!(render(false, emit), "always\n");
        assert_eq!(render(true, emit), "hidden unless verbose\nalways\n");
    }
}
