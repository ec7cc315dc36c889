//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Validation status of a field as far as the user can see it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus<'a> {
    /// Not interacted with yet
    Pristine,
    Valid,
    Invalid(&'a str),
}

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub is_active: bool,
    pub show_cursor: bool,
    pub is_multiline: bool,
    pub is_required: bool,
    pub status: FieldStatus<'a>,
}

fn border_style(is_active: bool, status: FieldStatus<'_>) -> Style {
    match status {
        FieldStatus::Invalid(_) => Style::default().fg(Color::Red),
        _ if is_active => Style::default().fg(Color::Cyan),
        FieldStatus::Valid => Style::default().fg(Color::Green),
        FieldStatus::Pristine => Style::default().fg(Color::DarkGray),
    }
}

/// Title line with the required marker
fn title(label: &str, is_required: bool) -> Line<'_> {
    let mut spans = vec![Span::raw(format!(" {label}"))];
    if is_required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Draw a bordered field; its error, if any, goes on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView<'_>) {
    let cursor = if field.show_cursor { "▌" } else { "" };
    let text_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = if field.value.is_empty() {
        let hint = field.placeholder.unwrap_or(if field.is_active { "" } else { "(empty)" });
        Paragraph::new(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(title(field.label, field.is_required))
        .borders(Borders::ALL)
        .border_style(border_style(field.is_active, field.status));

    if let FieldStatus::Invalid(message) = field.status {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a row of mutually exclusive options, e.g. a radio group
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldView<'_>,
    options: &[&str],
) {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for option in options {
        let selected = *option == field.value;
        let marker = if selected { "(•) " } else { "( ) " };
        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{marker}{option}"), style));
        spans.push(Span::raw("   "));
    }

    let mut block = Block::default()
        .title(title(field.label, field.is_required))
        .borders(Borders::ALL)
        .border_style(border_style(field.is_active, field.status));
    if let FieldStatus::Invalid(message) = field.status {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw help text at the bottom of forms
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
