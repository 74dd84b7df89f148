//! Game-over screen with the ranked high-score list.

use super::game_common::{create_screen_layout, render_centered_lines, render_status_bar};
use super::TITLE;
use flappy_rocket::highscores::Standing;
use flappy_rocket::HitCause;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// How the last session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnding {
    Crashed(HitCause),
    /// The player quit mid-flight.
    Abandoned,
}

impl SessionEnding {
    pub fn message(self) -> &'static str {
        match self {
            SessionEnding::Crashed(HitCause::Obstacle) => "You hit a meteor.",
            SessionEnding::Crashed(HitCause::Ground) => "You fell before the first meteor.",
            SessionEnding::Abandoned => "Flight aborted.",
        }
    }
}

/// Everything the game-over screen shows.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    /// Persisted list and this run's row in it.
    pub standing: Standing,
    pub last_score: u32,
    pub ending: SessionEnding,
}

pub fn render_scores(frame: &mut Frame, board: &ScoreBoard) {
    let area = frame.size();
    let layout = create_screen_layout(frame, area, TITLE, Color::Red);

    let mut lines = vec![
        Line::from(Span::styled(
            "High Scores",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if board.standing.scores.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, score) in board.standing.scores.iter().enumerate() {
        let style = if board.standing.rank == Some(i) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, score),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        board.ending.message(),
        Style::default().fg(Color::Red),
    )));
    lines.push(Line::from(Span::styled(
        format!("Your score: {}", board.last_score),
        Style::default().fg(Color::White),
    )));

    render_centered_lines(frame, layout.content, lines);

    let status = rank_message(&board.standing);
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        Color::Yellow,
        &[("[Enter]", "Menu"), ("[Esc]", "Quit")],
    );
}

/// Status-bar verdict for this run.
fn rank_message(standing: &Standing) -> String {
    match standing.rank {
        // Ties rank below existing entries, so first place is strictly better
        Some(0) => "New best!".to_string(),
        Some(i) => format!("Ranked #{}", i + 1),
        None => "Not in the top 5".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending_messages_distinct() {
        let messages = [
            SessionEnding::Crashed(HitCause::Obstacle).message(),
            SessionEnding::Crashed(HitCause::Ground).message(),
            SessionEnding::Abandoned.message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_rank_message() {
        let best = Standing {
            scores: vec![60, 50],
            rank: Some(0),
        };
        assert_eq!(rank_message(&best), "New best!");

        // Tying the best lands on the second row
        let tie = Standing {
            scores: vec![50, 50],
            rank: Some(1),
        };
        assert_eq!(rank_message(&tie), "Ranked #2");

        let missed = Standing {
            scores: vec![9, 8, 7, 6, 5],
            rank: None,
        };
        assert_eq!(rank_message(&missed), "Not in the top 5");
    }
}
