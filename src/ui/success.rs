//! Success screen rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 17;

/// Draw the post-submission success card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = layout::card_area(area, CARD_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Checkmark
            Constraint::Length(1),             // Heading
            Constraint::Length(2),             // Subtitle
            Constraint::Length(1),             // Session counter
            Constraint::Length(1),             // Spacer
            Constraint::Length(4),             // What's next panel
            Constraint::Length(BUTTON_HEIGHT), // Reset button
            Constraint::Length(1),             // Social prompt
        ])
        .margin(1)
        .split(card);

    let check = Paragraph::new("✓")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(check, chunks[0]);

    let heading = Paragraph::new("Welcome aboard!")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    let subtitle = Paragraph::new("Thanks for joining! We'll be in touch soon with updates.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(subtitle, chunks[2]);

    let counter = Paragraph::new(format!("You're #{} in this session", app.store.count()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(counter, chunks[3]);

    let next_steps = Paragraph::new(
        "We'll send you exclusive updates, early access, and behind-the-scenes content.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" What's next? ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(next_steps, chunks[5]);

    render_button(frame, chunks[6], "Submit Another Lead", true, None);

    let social = Paragraph::new("Follow our journey on social media for real-time updates")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(social, chunks[7]);
}
