//! Page flow for the interactive assessment, plus the one-shot `batch` and
//! `history` commands.
//!
//! ```text
//!   EntryForm ──submit ok──▶ Results ──Enter──▶ EntryForm
//!       ▲                       │
//!       └──── no payload ───────┘
//! ```

use std::io::{self, BufRead, Write};

use anyhow::Context;
use fin_core::form::{FormState, FormValues, normalize, validate};
use fin_core::insights::tone;
use fin_core::service::ServiceRegistry;
use fin_core::session::{
    HISTORY_LIMIT, Navigation, ResultsModel, SUBMIT_FAILURE_ALERT, SubmitOutcome, submit,
};
use fin_core::{FieldName, Locale, ScoringService};
use fin_http::HttpServiceFactory;
use ratatui::text::{Line, Span};
use tracing::{error, info};

use crate::utils::format_score;
use crate::views::Presentation;
use crate::views::canvas::{write_line, write_styled};
use crate::views::entry_form::{Command, parse_command, render_form, render_help, render_in_flight};
use crate::views::results::{NO_RESULT_NOTICE, render_history, render_history_table, render_results};
use crate::views::status_bar::{hints, render_alert, render_notice, render_status_bar};

pub const INVALID_NOTICE: &str = "Please correct the highlighted fields.";
pub const BUSY_NOTICE: &str = "An analysis is already in progress.";

/// Every backend this binary can talk to.
pub fn build_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register(Box::new(HttpServiceFactory));
    registry
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    EntryForm,
    Results,
}

/// Interactive session over any line reader and writer.
pub struct App<'a, R, W> {
    service: &'a dyn ScoringService,
    presentation: Presentation,
    form: FormState,
    navigation: Navigation,
    page: Page,
    /// Set at start and after each scored submission.
    needs_fill: bool,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> App<'a, R, W> {
    pub fn new(
        service: &'a dyn ScoringService,
        presentation: Presentation,
        input: R,
        out: W,
    ) -> Self {
        Self {
            service,
            form: FormState::new(presentation.locale),
            presentation,
            navigation: Navigation::new(),
            page: Page::EntryForm,
            needs_fill: true,
            input,
            out,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until the user quits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        info!(locale = self.presentation.locale.tag(), "assessment started");
        loop {
            let next = match self.page {
                Page::EntryForm => self.entry_form().await?,
                Page::Results => self.results().await?,
            };
            match next {
                Some(page) => {
                    info!(?page, "navigate");
                    self.page = page;
                }
                None => break,
            }
        }
        info!("assessment ended");
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(
        &mut self,
        text: &str,
    ) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Asks for each field in turn. Returns `false` when input ends.
    fn guided_fill(&mut self) -> io::Result<bool> {
        writeln!(self.out, "Enter your monthly figures.")?;
        for field in FieldName::ALL {
            let question = format!("{} ({}): ", field.label(), self.presentation.currency);
            let Some(line) = self.prompt(&question)? else {
                return Ok(false);
            };
            if let Some(error) = self.form.type_text(field, line.trim()) {
                let message = format!("  ! {error} (kept {})", self.form.value(field));
                let theme = &self.presentation.theme;
                write_styled(&mut self.out, &message, theme.error(), theme)?;
            }
        }
        Ok(true)
    }

    async fn entry_form(&mut self) -> io::Result<Option<Page>> {
        if self.needs_fill {
            self.needs_fill = false;
            if !self.guided_fill()? {
                return Ok(None);
            }
        }
        loop {
            render_form(&mut self.out, &self.form, &self.presentation)?;
            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };
            match parse_command(&line) {
                Command::Edit { field, text } => {
                    self.form.type_text(field, &text);
                }
                Command::Submit => {
                    if let Some(page) = self.submit().await? {
                        return Ok(Some(page));
                    }
                }
                Command::Clear => self.form.clear(),
                Command::Results => return Ok(Some(Page::Results)),
                Command::Help => render_help(&mut self.out, &self.presentation)?,
                Command::Quit => return Ok(None),
                Command::Empty => {}
                Command::Unknown(text) => render_notice(
                    &mut self.out,
                    &format!("Unknown command '{text}'. Type help for the list."),
                    &self.presentation,
                )?,
            }
        }
    }

    async fn submit(&mut self) -> io::Result<Option<Page>> {
        if self.form.can_submit() {
            render_in_flight(&mut self.out, &self.presentation)?;
        }
        match submit(&mut self.form, self.service).await {
            SubmitOutcome::Scored(payload) => {
                self.navigation.push(payload);
                self.needs_fill = true;
                Ok(Some(Page::Results))
            }
            SubmitOutcome::Invalid(_) => {
                render_notice(&mut self.out, INVALID_NOTICE, &self.presentation)?;
                Ok(None)
            }
            SubmitOutcome::Failed { alert, .. } => {
                render_alert(&mut self.out, alert, &self.presentation)?;
                Ok(None)
            }
            SubmitOutcome::Busy => {
                render_notice(&mut self.out, BUSY_NOTICE, &self.presentation)?;
                Ok(None)
            }
        }
    }

    async fn results(&mut self) -> io::Result<Option<Page>> {
        let Some(mut model) = ResultsModel::open(self.navigation.take()) else {
            render_notice(&mut self.out, NO_RESULT_NOTICE, &self.presentation)?;
            return Ok(Some(Page::EntryForm));
        };
        render_results(&mut self.out, &model, &self.presentation)?;
        self.out.flush()?;

        model.load_history(self.service).await;
        render_history(&mut self.out, &model.history, &self.presentation)?;
        writeln!(self.out)?;
        render_status_bar(&mut self.out, &hints::RESULTS_PAGE, &self.presentation)?;

        match self.prompt("> ")? {
            None => Ok(None),
            Some(line) if matches!(parse_command(&line), Command::Quit) => Ok(None),
            Some(_) => Ok(Some(Page::EntryForm)),
        }
    }
}

/// Per-row outcome counts of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub scored: usize,
    pub invalid: usize,
    pub failed: usize,
}

/// Runs each cell through the same filter and regrouping as typed input.
fn normalize_row(
    values: &FormValues,
    locale: Locale,
) -> FormValues {
    let mut row = FormValues::new();
    for field in FieldName::ALL {
        row.set(field, normalize(values.get(field), locale).display);
    }
    row
}

/// Validates every row and scores the valid ones, one line per row.
///
/// A failing row never stops the run.
pub async fn run_batch<W: Write>(
    service: &dyn ScoringService,
    rows: &[FormValues],
    p: &Presentation,
    out: &mut W,
) -> io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for (idx, values) in rows.iter().enumerate() {
        let row = idx + 1;
        let input = match validate(&normalize_row(values, p.locale)) {
            Ok(input) => input,
            Err(errors) => {
                summary.invalid += 1;
                let detail = errors
                    .iter()
                    .map(|(field, error)| format!("{}: {error}", field.label()))
                    .collect::<Vec<_>>()
                    .join("; ");
                let line = Line::from(vec![
                    Span::raw(format!("row {row}: ")),
                    Span::styled(format!("invalid ({detail})"), p.theme.error()),
                ]);
                write_line(out, &line, &p.theme)?;
                continue;
            }
        };
        match service.predict(&input).await {
            Ok(prediction) => {
                summary.scored += 1;
                let line = Line::from(vec![
                    Span::raw(format!(
                        "row {row}: income {} score {} ",
                        p.amount(input.monthly_income),
                        format_score(prediction.financial_score),
                    )),
                    Span::styled(
                        prediction.risk_category.as_str(),
                        p.theme.tone(tone(&prediction.risk_category)),
                    ),
                ]);
                write_line(out, &line, &p.theme)?;
            }
            Err(e) => {
                summary.failed += 1;
                error!(row, error = %e, "batch row failed");
                let line = Line::from(vec![
                    Span::raw(format!("row {row}: ")),
                    Span::styled(SUBMIT_FAILURE_ALERT, p.theme.error()),
                ]);
                write_line(out, &line, &p.theme)?;
            }
        }
    }
    writeln!(
        out,
        "{} scored, {} invalid, {} failed",
        summary.scored, summary.invalid, summary.failed
    )?;
    info!(?summary, "batch finished");
    Ok(summary)
}

/// Prints the most recent assessments.
pub async fn run_history<W: Write>(
    service: &dyn ScoringService,
    p: &Presentation,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut rows = service
        .history()
        .await
        .context("failed to fetch assessment history")?;
    rows.truncate(HISTORY_LIMIT);
    render_history_table(out, &rows, p)?;
    Ok(())
}
