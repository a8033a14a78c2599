// Overlay message box for the round-end notification

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A message displayed as a bordered box in the center of the screen.
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    pub lines: Vec<String>,
    pub title: Option<String>,
    pub style: OverlayStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Won the round (green)
    Success,
    /// Lost the round (yellow)
    Warning,
}

impl OverlayMessage {
    pub fn success(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Success,
        }
    }

    pub fn warning(lines: Vec<String>) -> Self {
        Self {
            lines,
            title: None,
            style: OverlayStyle::Warning,
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Success => Color::Green,
            OverlayStyle::Warning => Color::Yellow,
        }
    }

    fn text_color(&self) -> Color {
        match self.style {
            OverlayStyle::Success => Color::LightGreen,
            OverlayStyle::Warning => Color::Yellow,
        }
    }
}

/// Render an overlay message in the center of the screen
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    let max_line_length = message
        .lines
        .iter()
        .map(|line| line.len())
        .max()
        .unwrap_or(0);

    // Add padding for borders and spacing
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(4));
    let overlay_height = (message.lines.len() as u16 + 4).min(area.height.saturating_sub(4));

    let overlay_area = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(format!(" {} ", title));
    }

    frame.render_widget(block, overlay_area);

    let inner_area = overlay_area.inner(ratatui::layout::Margin::new(2, 1));

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(message.text_color()),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, inner_area);
}
