//! Lead form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout;
use crate::app::App;
use crate::state::{FieldValue, FormField, LeadField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height: header, three fields with error lines, banner, button, footer
const CARD_HEIGHT: u16 = 22;

/// Draw the capture form card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = layout::card_area(area, CARD_HEIGHT);

    let block = Block::default()
        .title(" Join Our Community ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Header blurb
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Industry
            Constraint::Length(1),             // Industry error
            Constraint::Length(1),             // Failure banner
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(2),             // Footer
        ])
        .margin(1)
        .split(card);

    let header = Paragraph::new("Be the first to know when we launch")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_field(frame, chunks[1], &app.form.name, app);
    draw_error_line(frame, chunks[2], app, LeadField::Name);

    draw_field(frame, chunks[3], &app.form.email, app);
    draw_error_line(frame, chunks[4], app, LeadField::Email);

    draw_field(frame, chunks[5], &app.form.industry, app);
    draw_error_line(frame, chunks[6], app, LeadField::Industry);

    if let Some(message) = app.form.submit_error() {
        let banner = Paragraph::new(format!("Submission failed: {message}"))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, chunks[7]);
    }

    render_button(
        frame,
        chunks[8],
        "Get Early Access",
        app.form.is_submit_row_active(),
        Some(Color::Green),
    );

    let footer = Paragraph::new("By submitting, you agree to receive updates. Unsubscribe anytime.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[9]);
}

/// Draw a single bordered field with placeholder, cursor, and error tint
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, app: &App) {
    let is_active = app.form.active_field().map(|f| f.field) == Some(field.field);
    let has_error = app.form.error_for(field.field).is_some();

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = if field.is_empty() {
        // Show the placeholder until the user types or chooses something
        let mut spans = Vec::new();
        if is_active && matches!(field.value, FieldValue::Text(_)) {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
        if is_active && matches!(field.value, FieldValue::Select(_)) {
            spans.push(Span::styled(" ◂ ▸", Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    } else {
        let mut spans = vec![Span::styled(field.display_value(), value_style)];
        match &field.value {
            FieldValue::Text(_) => {
                if is_active {
                    spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
                }
            }
            FieldValue::Select(_) => {
                if is_active {
                    spans.push(Span::styled(" ◂ ▸", Style::default().fg(Color::DarkGray)));
                }
            }
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the error line under a field, if that field has an active error
fn draw_error_line(frame: &mut Frame, area: Rect, app: &App, field: LeadField) {
    if let Some(error) = app.form.error_for(field) {
        let line = Paragraph::new(format!(" {}", error.message))
            .style(Style::default().fg(Color::Red));
        frame.render_widget(line, area);
    }
}
