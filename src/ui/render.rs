use ratatui::layout::{Constraint, Position};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::controller::WIN_MESSAGE;
use crate::ui::app::{App, Focus};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ERROR_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, WIN_TEXT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let header = Paragraph::new(Line::from(app.grid().puzzle_label().to_string()))
        .style(Style::default().fg(HEADER_TEXT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title("jotto"),
        );
    frame.render_widget(header, regions.header);

    let rows = app.grid().rows().iter().map(|row| {
        Row::new(vec![
            Cell::from(row.guess.clone()),
            Cell::from(row.letters.clone()).style(letters_style(&row.letters)),
            Cell::from(row.position.clone()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ],
    )
    .header(
        Row::new(vec!["Guess", "Letters in common", "Letters in position"])
            .style(Style::default().fg(HINT_TEXT)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(table, regions.table);

    let puzzle_field = Paragraph::new(app.puzzle_input().to_string()).block(field_block(
        "New puzzle",
        app.focus() == Focus::PuzzleField,
    ));
    frame.render_widget(puzzle_field, regions.puzzle_field);

    let guess_field = Paragraph::new(app.guess_input().to_string())
        .block(field_block("Guess", app.focus() == Focus::GuessField));
    frame.render_widget(guess_field, regions.guess_field);

    let footer = Paragraph::new("Enter: submit   Tab: switch field   Esc: quit")
        .style(Style::default().fg(HINT_TEXT));
    frame.render_widget(footer, regions.footer);

    // Cursor at the end of the focused field's text, inside its border.
    let (field_rect, text) = match app.focus() {
        Focus::GuessField => (regions.guess_field, app.guess_input()),
        Focus::PuzzleField => (regions.puzzle_field, app.puzzle_input()),
    };
    if field_rect.width > 2 && field_rect.height > 2 {
        frame.set_cursor_position(Position::new(
            cursor_col(field_rect, text),
            field_rect.y + 1,
        ));
    }
}

/// Cursor column after `text` in a bordered single-line field. Counts
/// characters, not bytes, and clamps to the field's inner width.
fn cursor_col(field: ratatui::layout::Rect, text: &str) -> u16 {
    let inner = usize::from(field.width.saturating_sub(2));
    let len = text.chars().count();
    field.x + 1 + len.min(inner.saturating_sub(1)) as u16
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

/// The letter-match column doubles as the message column: numbers are
/// scores, the win message is green, anything else is an error message.
fn letters_style(text: &str) -> Style {
    if text.is_empty() || text.chars().all(|c| c.is_ascii_digit()) {
        Style::default()
    } else if text == WIN_MESSAGE {
        Style::default().fg(WIN_TEXT)
    } else {
        Style::default().fg(ERROR_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn field() -> Rect {
        Rect {
            x: 2,
            y: 5,
            width: 12,
            height: 3,
        }
    }

    #[test]
    fn cursor_follows_ascii_text() {
        assert_eq!(cursor_col(field(), ""), 3);
        assert_eq!(cursor_col(field(), "crane"), 8);
    }

    #[test]
    fn cursor_counts_characters_not_bytes() {
        // Five characters, seven bytes.
        assert_eq!(cursor_col(field(), "héllö"), cursor_col(field(), "hello"));
    }

    #[test]
    fn cursor_clamps_to_the_inner_width() {
        let col = cursor_col(field(), "much-too-long-for-the-field");
        assert_eq!(col, 2 + 1 + 9);
    }
}
