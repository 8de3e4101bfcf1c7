use crate::quiz::view::{QuizView, RoundView, SlotView};
use crate::quiz::slot::Slot;
use crate::ui::flags;
use crate::ui::layout::board_layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, round: &RoundView, cursor: Slot) {
    let (prompt_area, card_areas) = board_layout(area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("Select the flag you think is the flag of ", Theme::prompt()),
        Span::styled(view.target.name(), Theme::target()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, prompt_area);

    for (slot_view, card_area) in round.slots.iter().zip(card_areas) {
        render_card(frame, card_area, slot_view, slot_view.slot == cursor);
    }
}

fn card_style(slot: &SlotView) -> Style {
    if slot.user_pick {
        Theme::card_picked()
    } else if slot.wrong_pick {
        Theme::card_wrong()
    } else if slot.correct_highlight {
        Theme::card_correct()
    } else {
        Theme::card_idle()
    }
}

fn render_card(frame: &mut Frame, area: Rect, slot: &SlotView, has_cursor: bool) {
    let style = card_style(slot);
    let block = Block::default()
        .title(format!(" {} ", slot.slot.index() + 1))
        .title_style(style)
        .borders(Borders::ALL)
        .border_type(if has_cursor {
            Theme::border_type_cursor()
        } else {
            Theme::border_type()
        })
        .border_style(style);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 2 || inner.height < 1 {
        return;
    }

    // Leave a one-cell margin so the border color stays readable.
    let art = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    let lines = flags::flag_lines(slot.country, art.width, art.height);
    frame.render_widget(Paragraph::new(lines), art);
}
