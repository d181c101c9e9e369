use core::fmt;

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::process::Command;

/// Quote a string so that it can be pasted into a POSIX shell.
///
/// Strings which are safe as-is are borrowed, anything else is wrapped in
/// single quotes.
pub(crate) fn escape(s: &OsStr) -> Cow<'_, str> {
    let Some(s) = s.to_str() else {
        return Cow::Borrowed("<non-utf8>");
    };

    if !s.is_empty() && s.chars().all(is_shell_safe) {
        return Cow::Borrowed(s);
    }

    let mut o = String::with_capacity(s.len() + 2);
    o.push('\'');

    for c in s.chars() {
        if c == '\'' {
            o.push_str("'\\''");
        } else {
            o.push(c);
        }
    }

    o.push('\'');
    Cow::Owned(o)
}

fn is_shell_safe(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '+' | '=' | ',' | '@' | '%')
}

/// Helper type to render a command, with some arguments substituted by
/// placeholders.
pub(crate) struct FormatCommand<'a> {
    cmd: &'a Command,
    replacements: HashMap<&'a OsStr, Cow<'a, str>>,
}

impl<'a> FormatCommand<'a> {
    pub(crate) fn new(cmd: &'a Command) -> Self {
        Self {
            cmd,
            replacements: HashMap::new(),
        }
    }

    /// Render `key` as `value` wherever it appears as the program or an
    /// argument.
    pub(crate) fn insert_replacement(
        &mut self,
        key: &'a (impl AsRef<OsStr> + ?Sized),
        value: impl Into<Cow<'a, str>>,
    ) {
        self.replacements.insert(key.as_ref(), value.into());
    }

    fn part(&self, f: &mut fmt::Formatter<'_>, part: &OsStr) -> fmt::Result {
        match self.replacements.get(part) {
            Some(value) => f.write_str(value),
            None => f.write_str(&escape(part)),
        }
    }
}

impl fmt::Display for FormatCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.part(f, self.cmd.get_program())?;

        for arg in self.cmd.get_args() {
            f.write_str(" ")?;
            self.part(f, arg)?;
        }

        Ok(())
    }
}
