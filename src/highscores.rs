//! High-score persistence (plain text, one score per line, best first).

use crate::constants::MAX_HIGH_SCORES;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a score file. Blank lines are skipped, anything else that is not a
/// non-negative integer is `InvalidData`.
pub fn parse_scores(text: &str) -> io::Result<Vec<u32>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u32>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid score line {:?}: {}", line, e),
                )
            })
        })
        .collect()
}

pub fn format_scores(scores: &[u32]) -> String {
    scores.iter().map(|s| format!("{}\n", s)).collect()
}

/// A score list after recording one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Best first, at most `MAX_HIGH_SCORES` entries.
    pub scores: Vec<u32>,
    /// Zero-based row of the session's own entry, `None` if it did not make
    /// the list.
    pub rank: Option<usize>,
}

/// Add a score to a list, keeping only the best `MAX_HIGH_SCORES`, descending.
pub fn insert_score(scores: Vec<u32>, score: u32) -> Vec<u32> {
    place_score(scores, score).scores
}

/// Insert `score` below every entry greater than or equal to it and report
/// where it landed. A tie never displaces an older entry, so rank 0 means a
/// strictly higher score than any listed.
pub fn place_score(mut scores: Vec<u32>, score: u32) -> Standing {
    scores.sort_unstable_by(|a, b| b.cmp(a));
    let index = scores.iter().take_while(|&&s| s >= score).count();
    scores.insert(index, score);
    scores.truncate(MAX_HIGH_SCORES);

    Standing {
        scores,
        rank: (index < MAX_HIGH_SCORES).then_some(index),
    }
}

/// Load the high-score list. A missing file is an empty list.
pub fn load_highscores(path: &Path) -> io::Result<Vec<u32>> {
    match fs::read_to_string(path) {
        Ok(text) => parse_scores(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Record a finished session's score and return the list as written, with
/// the session's rank in it.
///
/// Overwrites the file in place; there is no locking, a single running
/// instance is assumed.
pub fn save_highscore(path: &Path, score: u32) -> io::Result<Standing> {
    let standing = place_score(load_highscores(path)?, score);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format_scores(&standing.scores))?;
    log::info!(
        "Saved score {} to {} (rank {:?})",
        score,
        path.display(),
        standing.rank
    );

    Ok(standing)
}
