use std::process::ExitCode;

/// Running tally of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub(crate) total: usize,
    pub(crate) failed: usize,
}

impl Outcome {
    #[inline]
    pub(crate) fn record(&mut self, ok: bool) {
        self.total += 1;

        if !ok {
            self.failed += 1;
        }
    }

    /// Test if every conversion succeeded, which trivially holds for an empty
    /// batch.
    #[inline]
    pub(crate) fn success(&self) -> bool {
        self.failed == 0
    }

    pub(crate) fn exit_code(&self) -> ExitCode {
        if self.success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn one_failure_fails_the_batch() {
        let mut outcome = Outcome::default();
        assert!(outcome.success());

        outcome.record(true);
        outcome.record(false);
        outcome.record(true);

        assert!(!outcome.success());
        assert_eq!(outcome, Outcome { total: 3, failed: 1 });
    }
}
