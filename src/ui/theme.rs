use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const INDIGO: Color = Color::Rgb(88, 86, 214);
    pub const CORRECT: Color = Color::Rgb(52, 199, 89);
    pub const WRONG: Color = Color::Rgb(255, 59, 48);

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Color::White).bg(Self::INDIGO)
    }

    pub fn counter() -> Style {
        Self::header().add_modifier(Modifier::BOLD)
    }

    pub fn prompt() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn target() -> Style {
        Style::default().fg(Self::INDIGO).add_modifier(Modifier::BOLD)
    }

    pub fn card_idle() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn card_picked() -> Style {
        Style::default().fg(Self::INDIGO).add_modifier(Modifier::BOLD)
    }

    pub fn card_wrong() -> Style {
        Style::default().fg(Self::WRONG).add_modifier(Modifier::BOLD)
    }

    pub fn card_correct() -> Style {
        Style::default().fg(Self::CORRECT).add_modifier(Modifier::BOLD)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_cursor() -> BorderType {
        BorderType::Thick
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::INDIGO)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }

    pub fn score() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn popup() -> Style {
        Style::default().fg(Self::WRONG)
    }
}
