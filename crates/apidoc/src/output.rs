//! Status lines printed while generating pages.

use console::{Style, Term};

/// How a status line is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Plain,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> Option<Style> {
        match self {
            Self::Plain => None,
            Self::Success => Some(Style::new().green()),
            Self::Warning => Some(Style::new().yellow()),
            Self::Error => Some(Style::new().red().bold()),
        }
    }

    fn format(self, msg: &str) -> String {
        match self.style() {
            Some(style) => style.apply_to(msg).to_string(),
            None => msg.to_owned(),
        }
    }
}

/// Reports progress and results of a run on stderr.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Progress line, uncolored.
    pub(crate) fn info(&self, msg: &str) {
        self.line(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Tone::Success, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Error, msg);
    }

    fn line(&self, tone: Tone, msg: &str) {
        let _ = self.term.write_line(&tone.format(msg));
    }
}
