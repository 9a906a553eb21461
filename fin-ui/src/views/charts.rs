//! Chart datasets drawn as horizontal ratatui bar charts, with the
//! percentage and raw value printed to the right of each bar.

use std::io::{self, Write};

use fin_core::insights::Dataset;
use ratatui::layout::{Direction, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph, Widget};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use super::Presentation;
use super::canvas::{draw, write_line};
use crate::utils::format_percent;

/// Bar length at 100%.
pub const BAR_WIDTH: u16 = 30;

const INDENT: u16 = 4;
const LABEL_WIDTH: u16 = 12;
const FIGURES_WIDTH: u16 = 32;

/// Bar value on a 0..=100 scale.
pub fn bar_value(percent: Decimal) -> u64 {
    percent
        .clamp(Decimal::ZERO, dec!(100))
        .round()
        .to_u64()
        .unwrap_or(0)
}

/// Writes one dataset: a title, then one bar per point. `value` formats the
/// raw point value shown after the percentage.
pub fn render_dataset<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    p: &Presentation,
    value: impl Fn(f64) -> String,
) -> io::Result<()> {
    let title = Line::from(vec![
        Span::raw("  "),
        Span::styled(dataset.title, p.theme.strong()),
    ]);
    write_line(out, &title, &p.theme)?;

    let label_width = usize::from(LABEL_WIDTH);
    let bars: Vec<Bar> = dataset
        .points
        .iter()
        .map(|point| {
            Bar::default()
                .label(Line::from(format!("{:<label_width$}", point.label)))
                .value(bar_value(point.percent))
                .text_value(String::new())
        })
        .collect();
    let figures: Vec<Line> = dataset
        .points
        .iter()
        .map(|point| {
            Line::from(format!(
                "{:>7}  {}",
                format_percent(point.percent),
                value(point.value)
            ))
        })
        .collect();

    let chart_width = LABEL_WIDTH + 1 + BAR_WIDTH;
    let height = u16::try_from(dataset.points.len()).unwrap_or(u16::MAX);
    draw(
        out,
        INDENT + chart_width + FIGURES_WIDTH,
        height,
        &p.theme,
        |area, buf| {
            BarChart::default()
                .direction(Direction::Horizontal)
                .bar_width(1)
                .bar_gap(0)
                .bar_style(p.theme.bar())
                .max(100)
                .data(BarGroup::default().bars(&bars))
                .render(
                    Rect {
                        x: area.x + INDENT,
                        width: chart_width,
                        ..area
                    },
                    buf,
                );
            Paragraph::new(figures).render(
                Rect {
                    x: area.x + INDENT + chart_width,
                    width: FIGURES_WIDTH,
                    ..area
                },
                buf,
            );
        },
    )
}
