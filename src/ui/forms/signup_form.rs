//! Registration form rendering

use super::field_renderer::{draw_choice_field, draw_field, draw_help_text, FieldStatus, FieldView};
use crate::app::App;
use crate::state::{FieldName, SignupForm, BUTTON_RESET, BUTTON_SUBMIT, GENDER_OPTIONS};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::validation::MAX_STRENGTH;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = "Tab/Shift+Tab: move  ←/→: choose  Space: toggle  \
                         Ctrl+S: submit  Ctrl+R: reset  Esc: quit";

/// Draw registration form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(26), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], &app.form);
    draw_action_panel(frame, main_chunks[1], &app.form);
}

fn status(form: &SignupForm, field: FieldName) -> FieldStatus<'_> {
    if let Some(message) = form.visible_error(field) {
        FieldStatus::Invalid(message)
    } else if form.is_visibly_valid(field) {
        FieldStatus::Valid
    } else {
        FieldStatus::Pristine
    }
}

fn view<'a>(form: &'a SignupForm, field: FieldName, value: &'a str) -> FieldView<'a> {
    FieldView {
        label: field.label(),
        value,
        placeholder: field.placeholder(),
        is_active: form.active_field_name() == Some(field),
        show_cursor: form.active_field_name() == Some(field),
        is_multiline: field == FieldName::Comment,
        is_required: field.is_required(),
        status: status(form, field),
    }
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form.is_buttons_row_active() {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Length(3), // Birth date
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Password
            Constraint::Length(1), // Strength meter
            Constraint::Min(4),    // Comment
            Constraint::Length(3), // Terms
        ])
        .split(inner);

    let text_fields = [
        (FieldName::Name, chunks[0]),
        (FieldName::Email, chunks[1]),
        (FieldName::Phone, chunks[2]),
        (FieldName::BirthDate, chunks[3]),
        (FieldName::Comment, chunks[7]),
    ];
    for (field, area) in text_fields {
        draw_field(frame, area, &view(form, field, form.value(field).as_text()));
    }

    draw_choice_field(
        frame,
        chunks[4],
        &view(form, FieldName::Gender, form.value(FieldName::Gender).as_text()),
        &GENDER_OPTIONS,
    );

    let masked = "•".repeat(form.value(FieldName::Password).as_text().chars().count());
    draw_field(frame, chunks[5], &view(form, FieldName::Password, &masked));
    draw_strength(frame, chunks[6], form);

    draw_terms(frame, chunks[8], form);
}

/// Draw the password strength meter
fn draw_strength(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let score = form.strength();
    let color = match score {
        0..=1 => Color::Red,
        2 => Color::LightRed,
        3 => Color::Yellow,
        4 => Color::LightGreen,
        _ => Color::Green,
    };

    let mut spans = vec![Span::styled(" Strength: ", Style::default().fg(Color::DarkGray))];
    for cell in 0..MAX_STRENGTH {
        let style = if cell < score {
            Style::default().fg(color)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("■", style));
    }
    if let Some(label) = form.strength_label() {
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_terms(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let checkbox = if form.value(FieldName::TermsAccepted).as_flag() {
        "[x]"
    } else {
        "[ ]"
    };
    let value = format!("{checkbox} I accept the terms of use");
    let mut field = view(form, FieldName::TermsAccepted, &value);
    field.show_cursor = false;
    draw_field(frame, area, &field);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let is_focused = form.is_buttons_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(4),             // Message
            Constraint::Min(0),                // Help
        ])
        .split(inner_area);

    render_action_button(
        frame,
        chunks[0],
        "Submit",
        is_focused && form.selected_button == BUTTON_SUBMIT,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        chunks[1],
        "Reset",
        is_focused && form.selected_button == BUTTON_RESET,
        Some(Color::Gray),
    );

    if let Some(text) = form.message().text() {
        let color = if form.message().is_success() {
            Color::Green
        } else {
            Color::Red
        };
        let message = Paragraph::new(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[2]);
    }

    draw_help_text(frame, chunks[3], HELP_TEXT);
}
