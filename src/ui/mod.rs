//! UI module for rendering the capture client

mod components;
mod form;
mod layout;
mod success;

use crate::app::App;
use crate::state::FormPhase;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    match app.form.phase() {
        FormPhase::Submitted => success::draw(frame, content_area, app),
        _ => form::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
