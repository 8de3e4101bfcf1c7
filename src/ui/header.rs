use crate::quiz::view::QuizView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView) {
    let block = Block::default()
        .style(Theme::header())
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Span::styled("Flag Quiz!", Theme::counter()));
    frame.render_widget(title, inner);

    let counter = Paragraph::new(Span::styled(
        format!("[ {} / {} ]", view.display_attempt(), view.total_rounds),
        Theme::counter(),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(counter, inner);
}
