//! Styles for rendered frames.
//!
//! | Role          | Style        |
//! |---------------|--------------|
//! | `Positive`    | bold green   |
//! | `Caution`     | bold yellow  |
//! | `Danger`      | bold red     |
//! | `Neutral`     | bold         |
//! | field errors  | red          |
//! | chart bars    | cyan         |
//! | hints, rules  | dim          |
//!
//! A plain theme keeps the same styles; the writer in
//! [`crate::views::canvas`] drops them when `colored()` is false.

use std::io::IsTerminal;

use fin_core::insights::RiskTone;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Colors when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn tone(
        &self,
        tone: RiskTone,
    ) -> Style {
        match tone {
            RiskTone::Positive => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            RiskTone::Caution => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            RiskTone::Danger => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            RiskTone::Neutral => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn strong(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    pub fn bar(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }
}
