use crate::app::state::AppState;
use crate::quiz::engine::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    )];

    if state.config.ui.show_key_hints {
        let hints: Vec<(&str, &str)> = match (state.confirm.is_some(), state.view().phase) {
            (true, _) => vec![("y", "back"), ("n", "cancel")],
            (false, Phase::Playing) => vec![
                ("1-3", "pick"),
                ("←→", "move"),
                ("space", "pick"),
                ("enter", "validate/next"),
                ("r", "reset"),
                ("b", "back"),
                ("q", "quit"),
            ],
            (false, Phase::Summary) => vec![("enter", "start again"), ("q", "quit")],
        };
        for (key, what) in hints {
            parts.push(Span::styled(format!(" {}", key), Theme::key_hint()));
            parts.push(Span::styled(format!(" {} ", what), Theme::status_bar()));
        }
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}
