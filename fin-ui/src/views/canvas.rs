//! Bridges ratatui text and widgets to a line-oriented `io::Write`.
//!
//! Widgets are drawn into an off-screen [`Buffer`], then each row is written
//! as a [`Line`]. Styles become crossterm escape sequences only when the
//! theme is colored, so the same frame reads cleanly in a pipe or a test.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetForegroundColor};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// Writes `line` followed by a newline.
pub fn write_line<W: Write>(
    out: &mut W,
    line: &Line<'_>,
    theme: &Theme,
) -> io::Result<()> {
    for span in &line.spans {
        write_span(out, span, theme)?;
    }
    writeln!(out)
}

/// One line holding a single styled run.
pub fn write_styled<W: Write>(
    out: &mut W,
    text: &str,
    style: Style,
    theme: &Theme,
) -> io::Result<()> {
    write_line(out, &Line::from(Span::styled(text, style)), theme)
}

/// Renders `paint` into a `width` x `height` buffer and writes every row.
pub fn draw<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    theme: &Theme,
    paint: impl FnOnce(Rect, &mut Buffer),
) -> io::Result<()> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    paint(area, &mut buf);
    for line in buffer_lines(&buf) {
        write_line(out, &line, theme)?;
    }
    Ok(())
}

/// Buffer rows as lines, adjacent cells of one style merged into one span
/// and trailing blanks dropped.
pub fn buffer_lines(buf: &Buffer) -> Vec<Line<'static>> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let end = (area.left()..area.right())
                .rev()
                .find(|&x| buf[(x, y)].symbol() != " ")
                .map_or(area.left(), |x| x + 1);
            let mut spans: Vec<Span<'static>> = Vec::new();
            for x in area.left()..end {
                let cell = &buf[(x, y)];
                let style = cell.style();
                match spans.last_mut() {
                    Some(last) if last.style == style => {
                        last.content.to_mut().push_str(cell.symbol());
                    }
                    _ => spans.push(Span::styled(cell.symbol().to_string(), style)),
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn is_plain(style: &Style) -> bool {
    style.fg.is_none_or(|fg| fg == Color::Reset) && style.add_modifier.is_empty()
}

fn write_span<W: Write>(
    out: &mut W,
    span: &Span<'_>,
    theme: &Theme,
) -> io::Result<()> {
    if !theme.is_colored() || is_plain(&span.style) {
        return out.write_all(span.content.as_bytes());
    }
    if let Some(fg) = span.style.fg.filter(|fg| *fg != Color::Reset) {
        queue!(out, SetForegroundColor(fg.into()))?;
    }
    if span.style.add_modifier.contains(Modifier::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if span.style.add_modifier.contains(Modifier::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    queue!(out, Print(&span.content), SetAttribute(Attribute::Reset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::widgets::{Paragraph, Widget};

    fn written(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_theme_writes_text_only() {
        let theme = Theme::plain();
        let line = Line::from(vec![
            Span::raw("Risk "),
            Span::styled("Risky", theme.tone(fin_core::insights::RiskTone::Danger)),
        ]);

        assert_eq!(written(|o| write_line(o, &line, &theme)), "Risk Risky\n");
    }

    #[test]
    fn colored_theme_wraps_styled_runs_only() {
        let theme = Theme::colored();
        let line = Line::from(vec![Span::raw("Risk "), Span::styled("Risky", theme.error())]);

        let text = written(|o| write_line(o, &line, &theme));

        assert!(text.starts_with("Risk \x1b["));
        assert!(text.contains("Risky"));
        assert!(text.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn drawn_rows_drop_trailing_blanks() {
        let theme = Theme::plain();

        let text = written(|o| {
            draw(o, 20, 2, &theme, |area, buf| {
                Paragraph::new(vec![Line::from("  one"), Line::from("two")]).render(area, buf);
            })
        });

        assert_eq!(text, "  one\ntwo\n");
    }

    #[test]
    fn same_style_cells_merge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        buf.set_string(0, 0, "ab", Style::default());
        buf.set_string(2, 0, "cd", Style::default().fg(Color::Red));

        let lines = buffer_lines(&buf);

        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].content, "ab");
        assert_eq!(lines[0].spans[1].content, "cd");
    }
}
