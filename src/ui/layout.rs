use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Vertical regions of the screen, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub table: Rect,
    pub puzzle_field: Rect,
    pub guess_field: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        table: chunks[1],
        puzzle_field: chunks[2],
        guess_field: chunks[3],
        footer: chunks[4],
    }
}
