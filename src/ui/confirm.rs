use crate::app::state::{AppState, ConfirmPrompt};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(prompt) = state.confirm else {
        return;
    };

    let (title, message) = match prompt {
        ConfirmPrompt::BackToStart => (" Back to start ", "Are you sure?"),
    };

    let popup_area = centered(frame.area(), 36, 7);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::popup());

    let lines = vec![
        Line::default(),
        Line::from(message),
        Line::default(),
        Line::from(vec![
            Span::styled("[y]", Theme::card_wrong()),
            Span::raw(" Back   "),
            Span::styled("[n]", Theme::title()),
            Span::raw(" Cancel"),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, popup_area);
}
