//! Results page: score, category, advisory, probabilities, charts,
//! recommendations and recent history.

use std::io::{self, Write};

use fin_core::HistoryRecord;
use fin_core::insights::tone;
use fin_core::session::{HistoryState, ResultsModel};
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row, Table, Widget};

use super::Presentation;
use super::canvas::{draw, write_line, write_styled};
use super::charts::render_dataset;
use super::status_bar::render_notice;
use crate::utils::{format_score, opt_amount_display};

pub const RESULTS_TITLE: &str = "Your Financial Health";
pub const NO_RESULT_NOTICE: &str = "No analysis to show yet. Returning to the form.";
pub const HISTORY_UNAVAILABLE: &str = "Previous assessments are unavailable right now.";
pub const HISTORY_EMPTY: &str = "No previous assessments.";

const TABLE_INDENT: u16 = 4;

const HISTORY_WIDTHS: [u16; 8] = [24, 12, 12, 12, 12, 12, 6, 10];

fn heading<'a>(
    text: &'a str,
    p: &Presentation,
) -> Line<'a> {
    Line::from(vec![Span::raw("  "), Span::styled(text, p.theme.strong())])
}

/// Everything above the history table.
pub fn render_results<W: Write>(
    out: &mut W,
    model: &ResultsModel,
    p: &Presentation,
) -> io::Result<()> {
    let theme = &p.theme;
    let prediction = &model.prediction;

    writeln!(out)?;
    write_styled(out, RESULTS_TITLE, theme.strong(), theme)?;
    write_styled(out, &"─".repeat(40), theme.dim(), theme)?;
    let score = Line::from(vec![
        Span::raw("  Financial Score  "),
        Span::styled(format_score(prediction.financial_score), theme.strong()),
    ]);
    write_line(out, &score, theme)?;
    let category = Line::from(vec![
        Span::raw("  Risk Category    "),
        Span::styled(prediction.risk_category.as_str(), theme.tone(model.tone())),
    ]);
    write_line(out, &category, theme)?;
    if let Some(advisory) = model.advisory() {
        writeln!(out, "  {advisory}")?;
    }
    if let Some(probabilities) = &prediction.probabilities {
        let parts: Vec<String> = probabilities
            .iter()
            .map(|(label, pct)| format!("{label} {pct:.1}%"))
            .collect();
        writeln!(out, "  Probabilities    {}", parts.join(", "))?;
    }

    let charts = &model.charts;
    writeln!(out)?;
    render_dataset(out, &charts.allocation, p, |v| p.amount(v))?;
    writeln!(out)?;
    render_dataset(out, &charts.cash_flow, p, |v| p.amount(v))?;
    writeln!(out)?;
    render_dataset(out, &charts.score, p, format_score)?;

    writeln!(out)?;
    write_line(out, &heading("Recommendations", p), theme)?;
    for rec in &model.recommendations {
        writeln!(out, "    • {}: {}", rec.title(), rec.message())?;
    }
    Ok(())
}

/// The history section in whatever state the fetch left it.
pub fn render_history<W: Write>(
    out: &mut W,
    history: &HistoryState,
    p: &Presentation,
) -> io::Result<()> {
    writeln!(out)?;
    write_line(out, &heading("Recent Assessments", p), &p.theme)?;
    match history {
        HistoryState::NotLoaded => render_notice(out, "  Loading...", p),
        HistoryState::Failed(_) => render_notice(out, &format!("  {HISTORY_UNAVAILABLE}"), p),
        HistoryState::Loaded(rows) => render_history_table(out, rows, p),
    }
}

/// One row per record, in the order given.
pub fn render_history_table<W: Write>(
    out: &mut W,
    rows: &[HistoryRecord],
    p: &Presentation,
) -> io::Result<()> {
    if rows.is_empty() {
        return render_notice(out, &format!("  {HISTORY_EMPTY}"), p);
    }
    let amount = |text: String| Cell::from(Line::from(text).right_aligned());
    let header = Row::new([
        Cell::from("Date"),
        amount("Income".to_string()),
        amount("Expenses".to_string()),
        amount("Loan EMI".to_string()),
        amount("Savings".to_string()),
        amount("Investments".to_string()),
        amount("Score".to_string()),
        Cell::from("Category"),
    ])
    .style(p.theme.strong());
    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new([
                Cell::from(p.locale.format_timestamp(&row.created_at)),
                amount(p.amount(row.monthly_income)),
                amount(p.amount(row.monthly_expenses)),
                amount(opt_amount_display(row.loan_emi, p.locale, &p.currency)),
                amount(opt_amount_display(row.savings, p.locale, &p.currency)),
                amount(opt_amount_display(row.investments, p.locale, &p.currency)),
                amount(format_score(row.financial_score)),
                Cell::from(Span::styled(
                    row.risk_category.as_str().to_string(),
                    p.theme.tone(tone(&row.risk_category)),
                )),
            ])
        })
        .collect();
    let widths = HISTORY_WIDTHS.map(Constraint::Length);

    let columns = u16::try_from(HISTORY_WIDTHS.len()).unwrap_or(0);
    let width = TABLE_INDENT + HISTORY_WIDTHS.iter().sum::<u16>() + columns.saturating_sub(1);
    let height = u16::try_from(rows.len() + 1).unwrap_or(u16::MAX);
    draw(out, width, height, &p.theme, |area, buf| {
        Table::new(body, widths).header(header).column_spacing(1).render(
            Rect {
                x: area.x + TABLE_INDENT,
                width: area.width - TABLE_INDENT,
                ..area
            },
            buf,
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fin_core::session::NavigationPayload;
    use fin_core::{FinancialInput, Locale, Prediction, RiskCategory, ServiceError};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn model() -> ResultsModel {
        ResultsModel::open(Some(NavigationPayload {
            prediction: Prediction {
                financial_score: 72.0,
                risk_category: RiskCategory::Moderate,
                probabilities: Some(BTreeMap::from([
                    ("Good".to_string(), 20.0),
                    ("Moderate".to_string(), 70.0),
                    ("Risky".to_string(), 10.0),
                ])),
            },
            form_data: FinancialInput {
                monthly_income: 100000.0,
                monthly_expenses: 50000.0,
                loan_emi: 20000.0,
                savings: 20000.0,
                investments: 10000.0,
            },
        }))
        .unwrap()
    }

    fn record(created_at: &str) -> HistoryRecord {
        HistoryRecord {
            id: Some(1),
            monthly_income: 80000.0,
            monthly_expenses: 40000.0,
            loan_emi: None,
            savings: Some(20000.0),
            investments: None,
            financial_score: 65.26,
            risk_category: RiskCategory::Good,
            created_at: created_at.to_string(),
        }
    }

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_lines() {
        let p = Presentation::plain(Locale::EnIn);
        let out = text(|o| render_results(o, &model(), &p));

        assert!(out.contains("Financial Score  72.0"));
        assert!(out.contains("Risk Category    Moderate"));
        assert!(out.contains("moderate"));
        assert!(out.contains("Probabilities    Good 20.0%, Moderate 70.0%, Risky 10.0%"));
        assert!(out.contains("Income Allocation"));
        assert!(out.contains("Income vs Outflows"));
        assert!(out.contains("₹50,000"));
        assert!(out.contains("Recommendations"));
    }

    #[test]
    fn unknown_category_has_no_advisory() {
        let mut model = model();
        model.prediction.risk_category = RiskCategory::Other("Unrated".to_string());
        let p = Presentation::plain(Locale::EnIn);

        let out = text(|o| render_results(o, &model, &p));

        assert!(out.contains("Risk Category    Unrated"));
        assert!(!out.contains("moderate"));
    }

    #[test]
    fn history_rows_use_locale_and_dashes() {
        let p = Presentation::plain(Locale::EnUs);
        let rows = vec![record("2025-01-15 21:05:00.123456")];

        let out = text(|o| render_history_table(o, &rows, &p));

        let line = out.lines().nth(1).unwrap();
        assert!(line.contains("1/15/2025, 9:05:00 PM"));
        assert!(line.contains("$80,000"));
        assert!(line.contains("—"));
        assert!(line.contains("65.3"));
        assert!(line.ends_with("Good"));
    }

    #[test]
    fn history_states() {
        let p = Presentation::plain(Locale::EnIn);

        let empty = text(|o| render_history(o, &HistoryState::Loaded(Vec::new()), &p));
        assert!(empty.contains(HISTORY_EMPTY));

        let failed = text(|o| {
            render_history(
                o,
                &HistoryState::Failed(ServiceError::Transport("refused".to_string())),
                &p,
            )
        });
        assert!(failed.contains(HISTORY_UNAVAILABLE));
        assert_eq!(failed.matches("refused").count(), 0);
    }
}
