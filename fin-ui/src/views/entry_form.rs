//! Entry form: field list with inline errors, running totals, submit control,
//! and the command grammar accepted at the form prompt.

use std::io::{self, Write};

use fin_core::FieldName;
use fin_core::form::FormState;
use fin_core::form::state::SUBMITTING_LABEL;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::Presentation;
use super::canvas::{write_line, write_styled};
use super::status_bar::{hints, render_status_bar};

pub const FORM_TITLE: &str = "Financial Health Check";

const LABEL_WIDTH: usize = 18;

/// One line typed at the form prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<field> <text>`; empty text clears the field.
    Edit { field: FieldName, text: String },
    Submit,
    Clear,
    Results,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    match head.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "submit" | "analyze" => Command::Submit,
        "clear" | "reset" => Command::Clear,
        "results" => Command::Results,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => match FieldName::parse(other) {
            Some(field) => Command::Edit {
                field,
                text: rest.to_string(),
            },
            None => Command::Unknown(line.to_string()),
        },
    }
}

/// Renders the whole form page.
pub fn render_form<W: Write>(
    out: &mut W,
    form: &FormState,
    p: &Presentation,
) -> io::Result<()> {
    let theme = &p.theme;
    let rule = "─".repeat(40);
    writeln!(out)?;
    write_styled(out, FORM_TITLE, theme.strong(), theme)?;
    write_styled(out, &rule, theme.dim(), theme)?;

    for field in FieldName::ALL {
        writeln!(
            out,
            "  {:<LABEL_WIDTH$} {} {}",
            field.label(),
            p.currency,
            form.value(field)
        )?;
        if let Some(error) = form.error(field) {
            let line = Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("! {error}"), theme.error()),
            ]);
            write_line(out, &line, theme)?;
        }
    }

    let totals = form.totals();
    write_styled(out, &rule, theme.dim(), theme)?;
    writeln!(
        out,
        "  {:<LABEL_WIDTH$} {}",
        "Total Allocation",
        p.amount(totals.total_allocation)
    )?;
    let balance_style = if totals.is_reconciled() {
        Style::default()
    } else {
        theme.error()
    };
    let balance = Line::from(vec![
        Span::raw(format!("  {:<LABEL_WIDTH$} ", "Balance")),
        Span::styled(p.amount(totals.balance), balance_style),
    ]);
    write_line(out, &balance, theme)?;
    writeln!(out)?;

    render_submit_control(out, form, p)?;
    render_status_bar(out, &hints::FORM, p)
}

/// The submit control; shows the in-flight label while a request runs and
/// marks itself disabled when the form cannot be submitted.
pub fn render_submit_control<W: Write>(
    out: &mut W,
    form: &FormState,
    p: &Presentation,
) -> io::Result<()> {
    let label = format!("[ {} ]", form.submit_label());
    let line = if form.can_submit() {
        Line::from(vec![Span::raw("  "), Span::styled(label, p.theme.strong())])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label, p.theme.dim()),
            Span::raw(" "),
            Span::styled("(disabled)", p.theme.dim()),
        ])
    };
    write_line(out, &line, &p.theme)
}

/// Printed just before the request goes out, while the form is blocked.
pub fn render_in_flight<W: Write>(
    out: &mut W,
    p: &Presentation,
) -> io::Result<()> {
    write_styled(out, &format!("  [ {SUBMITTING_LABEL} ]"), p.theme.dim(), &p.theme)?;
    out.flush()
}

pub fn render_help<W: Write>(
    out: &mut W,
    p: &Presentation,
) -> io::Result<()> {
    let lines = [
        "income <amount>        set Monthly Income (also: expenses, loan, savings, investments)",
        "<field>                clear a field",
        "submit                 validate and analyze",
        "clear                  empty every field",
        "results                show the last analysis",
        "quit                   exit",
    ];
    for line in lines {
        write_styled(out, &format!("  {line}"), p.theme.dim(), &p.theme)?;
    }
    Ok(())
}
