//! Title screen.

use super::game_common::{create_screen_layout, render_centered_lines, render_status_bar};
use super::TITLE;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the title screen. `best` is the top persisted score, if any.
pub fn render_menu(frame: &mut Frame, best: Option<u32>) {
    let area = frame.size();
    let layout = create_screen_layout(frame, area, TITLE, Color::Cyan);

    let mut lines = vec![
        Line::from(Span::styled(
            "F L A P P Y   R O C K E T",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Steer through the meteor field",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press ENTER to start",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Press ESC to quit",
            Style::default().fg(Color::White),
        )),
    ];

    if let Some(best) = best {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Best: {}", best),
            Style::default().fg(Color::Cyan),
        )));
    }

    render_centered_lines(frame, layout.content, lines);

    render_status_bar(
        frame,
        layout.status_bar,
        "Ready for launch",
        Color::Green,
        &[("[Enter]", "Start"), ("[Esc]", "Quit")],
    );
}
