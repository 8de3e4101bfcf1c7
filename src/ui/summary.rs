use crate::quiz::view::QuizView;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView) {
    let lines = vec![
        Line::from(Span::styled("Your total score:", Theme::prompt())),
        Line::default(),
        Line::from(Span::styled(
            format!("{} / {}", view.score, view.total_rounds),
            Theme::score(),
        )),
    ];
    let text_area = centered(area, area.width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}
