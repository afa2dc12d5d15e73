//! Layout helpers (centered card, status bar)

use crate::app::App;
use crate::platform;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Fixed width of the capture card
const CARD_WIDTH: u16 = 60;

/// Split the frame into the content area and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a card of the given height in the content area
pub fn card_area(area: Rect, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0), // Top padding (flex)
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0), // Bottom padding (flex)
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CARD_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Draw the status bar with key hints and any transient message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hint_style = Style::default().fg(Color::Cyan);

    let mut spans = match app.form.phase() {
        FormPhase::Editing | FormPhase::Submitting => vec![
            Span::styled("Tab", hint_style),
            Span::raw(": next field  "),
            Span::styled("◂ ▸", hint_style),
            Span::raw(": choose industry  "),
            Span::styled(platform::SUBMIT_SHORTCUT, hint_style),
            Span::raw(": submit  "),
            Span::styled("Esc", hint_style),
            Span::raw(": clear  "),
            Span::styled("Ctrl+C", hint_style),
            Span::raw(": quit"),
        ],
        FormPhase::Submitted => vec![
            Span::styled("Enter", hint_style),
            Span::raw(": submit another  "),
            Span::styled("q", hint_style),
            Span::raw(": quit"),
        ],
    };

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}
