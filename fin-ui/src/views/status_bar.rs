//! Status line: key hints, alerts and notices.

use std::io::{self, Write};

use super::Presentation;
use super::canvas::write_styled;

/// Command hint for the status bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Writes the hints on one dimmed line.
pub fn render_status_bar<W: Write>(
    out: &mut W,
    hints: &[KeyHint],
    p: &Presentation,
) -> io::Result<()> {
    let text = hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ");
    write_styled(out, &text, p.theme.dim(), &p.theme)
}

/// Blocking message the user must read before continuing.
pub fn render_alert<W: Write>(
    out: &mut W,
    message: &str,
    p: &Presentation,
) -> io::Result<()> {
    write_styled(out, &format!("[!] {message}"), p.theme.error(), &p.theme)
}

pub fn render_notice<W: Write>(
    out: &mut W,
    message: &str,
    p: &Presentation,
) -> io::Result<()> {
    write_styled(out, message, p.theme.dim(), &p.theme)
}

/// Hints shown under each page.
pub mod hints {
    use super::KeyHint;

    pub const EDIT: KeyHint = KeyHint::new("<field> <amount>", "Edit");
    pub const SUBMIT: KeyHint = KeyHint::new("submit", "Analyze");
    pub const CLEAR: KeyHint = KeyHint::new("clear", "Reset");
    pub const RESULTS: KeyHint = KeyHint::new("results", "Last result");
    pub const HELP: KeyHint = KeyHint::new("help", "Commands");
    pub const QUIT: KeyHint = KeyHint::new("quit", "Exit");
    pub const NEW: KeyHint = KeyHint::new("Enter", "New assessment");

    pub const FORM: [KeyHint; 6] = [EDIT, SUBMIT, CLEAR, RESULTS, HELP, QUIT];
    pub const RESULTS_PAGE: [KeyHint; 2] = [NEW, QUIT];
}
