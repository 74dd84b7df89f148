//! Integration tests for high-score persistence on real files.

use flappy_rocket::highscores::{load_highscores, save_highscore};
use flappy_rocket::MAX_HIGH_SCORES;
use std::fs;
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "flappy_rocket_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_new_score_lands_in_the_middle() {
    let dir = temp_dir("middle");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("highscores.txt");
    fs::write(&path, "50\n40\n30\n20\n10\n").unwrap();

    let standing = save_highscore(&path, 35).unwrap();

    assert_eq!(standing.scores, vec![50, 40, 35, 30, 20]);
    assert_eq!(standing.rank, Some(2));
    assert_eq!(fs::read_to_string(&path).unwrap(), "50\n40\n35\n30\n20\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_first_save_creates_file_and_directory() {
    let dir = temp_dir("first");
    let path = dir.join("nested").join("highscores.txt");

    assert_eq!(load_highscores(&path).unwrap(), Vec::<u32>::new());
    let standing = save_highscore(&path, 12).unwrap();

    assert_eq!(standing.scores, vec![12]);
    assert_eq!(standing.rank, Some(0));
    assert_eq!(fs::read_to_string(&path).unwrap(), "12\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_repeated_saves_keep_the_best_five() {
    let dir = temp_dir("repeated");
    let path = dir.join("highscores.txt");
    let sessions = [3, 17, 0, 42, 8, 17, 25, 1];

    for score in sessions {
        save_highscore(&path, score).unwrap();
    }

    let mut expected = sessions.to_vec();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    expected.truncate(MAX_HIGH_SCORES);

    assert_eq!(load_highscores(&path).unwrap(), expected);
    assert_eq!(expected, vec![42, 25, 17, 17, 8]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_low_score_does_not_make_a_full_list() {
    let dir = temp_dir("low");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("highscores.txt");
    fs::write(&path, "9\n8\n7\n6\n5\n").unwrap();

    let standing = save_highscore(&path, 2).unwrap();

    assert_eq!(standing.scores, vec![9, 8, 7, 6, 5]);
    assert_eq!(standing.rank, None);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_tying_the_best_highlights_the_new_row() {
    let dir = temp_dir("tie");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("highscores.txt");
    fs::write(&path, "30\n20\n").unwrap();

    let standing = save_highscore(&path, 30).unwrap();

    assert_eq!(standing.scores, vec![30, 30, 20]);
    assert_eq!(standing.rank, Some(1));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_corrupt_file_is_an_error_and_left_untouched() {
    let dir = temp_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("highscores.txt");
    fs::write(&path, "10\nnot a score\n").unwrap();

    assert!(save_highscore(&path, 99).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "10\nnot a score\n");

    fs::remove_dir_all(&dir).unwrap();
}
