//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    forms::draw_signup_form(frame, area, app);
}
