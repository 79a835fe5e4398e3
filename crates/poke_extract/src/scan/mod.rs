//! Walk-once line scanner shared by every domain parser.
//!
//! A parser implements [`Grammar`]: it classifies each lexed [`Line`] into
//! its own closed set of line kinds, then maps `(mode, kind)` to the next
//! mode while recording whatever the transition completes. The driver in
//! [`scan`] owns the mode, reports per-line failures and never stops early.

mod line;
mod text;


use std::fmt;

use log::{trace, warn};

pub use line::{strip_terminator, Directive, Label, Line};
pub use text::TextBuffer;

use crate::error::LineError;

/// A line grammar plus the records it builds.
pub trait Grammar {
    /// Named parser states. `Default` is the state before the first line.
    type Mode: Copy + Eq + fmt::Debug + Default;

    /// Closed set of line shapes this grammar recognises.
    type Kind<'a>: fmt::Debug;

    /// Classify a line. Lines of no interest map to an "other" kind rather
    /// than an error; errors are for lines that look like a directive but
    /// do not validate.
    fn classify<'a>(&self, line: &Line<'a>) -> Result<Self::Kind<'a>, LineError>;

    /// Apply one line. On error the mode is left unchanged.
    fn transition(
        &mut self,
        mode: Self::Mode,
        kind: Self::Kind<'_>,
    ) -> Result<Self::Mode, LineError>;

    /// Flush anything still pending at end of input.
    fn finish(&mut self, _mode: Self::Mode) {}
}

/// One dropped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIssue {
    /// 1-based.
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub lines: usize,
    pub issues: Vec<ScanIssue>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Run `grammar` over every line of `text`. `origin` names the source in
/// diagnostics.
pub fn scan<G: Grammar>(grammar: &mut G, origin: &str, text: &str) -> ScanReport {
    let mut mode = G::Mode::default();
    let mut report = ScanReport::default();

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        report.lines = number;
        let line = Line::lex(raw);

        let applied = match grammar.classify(&line) {
            Ok(kind) => grammar.transition(mode, kind),
            Err(err) => Err(err),
        };

        match applied {
            Ok(next) => {
                if next != mode {
                    trace!("{origin}:{number}: {mode:?} -> {next:?}");
                }
                mode = next;
            }
            Err(err) => {
                warn!("{origin}:{number}: {err}");
                report.issues.push(ScanIssue {
                    line: number,
                    message: err.to_string(),
                });
            }
        }
    }

    grammar.finish(mode);
    report
}
