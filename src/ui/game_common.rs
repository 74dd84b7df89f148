//! Shared UI components for every screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by [`create_screen_layout`].
pub struct ScreenLayout {
    /// Main content area, inside the outer border
    pub content: Rect,
    /// Status bar area (2 lines) at the bottom, inside the outer border
    pub status_bar: Rect,
}

/// Clear the area, draw the titled outer border and split the inside into
/// content and a 2-line status bar.
///
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │                                 │
/// │   [content area]                │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The full area to use
/// * `title` - Title for the outer border (e.g., " Flappy Rocket ")
/// * `border_color` - Color for the outer border
///
/// # Returns
/// A `ScreenLayout` with the content and status bar areas.
pub fn create_screen_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> ScreenLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    ScreenLayout {
        content: chunks[0],
        status_bar: chunks[1],
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The 2-line area from [`ScreenLayout::status_bar`]
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Enter]", "Start"), ("[Esc]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let controls_line = Paragraph::new(controls_line(controls)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// `[Key] Action  [Key] Action` with keys highlighted.
pub fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// A rect of `height` rows, vertically centred in `area`.
pub fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    )
}

/// Render lines centred both ways inside `area`.
///
/// Lines beyond the height of `area` are cut off at the bottom.
pub fn render_centered_lines(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let height = lines.len() as u16;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, centered_rows(area, height));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rows() {
        let area = Rect::new(2, 4, 40, 20);
        assert_eq!(centered_rows(area, 6), Rect::new(2, 11, 40, 6));
        // Taller than the area: clamp
        assert_eq!(centered_rows(area, 50), area);
    }

    #[test]
    fn test_controls_line_spans() {
        let line = controls_line(&[("[Enter]", "Start"), ("[Esc]", "Quit")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Enter] Start  [Esc] Quit");
    }
}
