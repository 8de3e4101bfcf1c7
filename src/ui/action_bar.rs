use crate::quiz::view::{PrimaryAction, QuizView};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Paragraph};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, tick_count: u64) {
    let (label, style) = match view.primary_action() {
        PrimaryAction::Validate { enabled: true } => ("✓ Validate".to_string(), Theme::button()),
        PrimaryAction::Validate { enabled: false } => {
            ("✓ Validate".to_string(), Theme::button_disabled())
        }
        PrimaryAction::Validating => {
            let frame_idx = (tick_count / 2) as usize % SPINNER.len();
            (format!("{} Validating…", SPINNER[frame_idx]), Theme::button())
        }
        PrimaryAction::Next => ("→ Next".to_string(), Theme::button()),
        PrimaryAction::StartAgain => ("↻ Start again".to_string(), Theme::button()),
    };

    let button_area = centered(area, 30, 3);
    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::vertical(1)))
        .style(style);
    frame.render_widget(button, button_area);
}
