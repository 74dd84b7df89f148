mod audio;
mod input;
mod tick_events;
mod ui;

use audio::SoundPlayer;
use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use flappy_rocket::config::USAGE;
use flappy_rocket::highscores::{load_highscores, save_highscore};
use flappy_rocket::utils::{data_dir, init_logging, load_json_or_default, save_json};
use flappy_rocket::{
    build_info, process_input, step, CliAction, CliArgs, Settings, StepOutcome, World,
    WorldConfig, LOG_FILENAME, SETTINGS_FILENAME,
};
use input::Intent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use ui::scores_scene::{ScoreBoard, SessionEnding};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How long menu screens wait for a key before redrawing.
const MENU_POLL: Duration = Duration::from_millis(50);

enum Screen {
    Menu,
    Playing,
    HighScores(ScoreBoard),
}

/// Shell context: everything the screens need, built once at startup.
struct App {
    settings: Settings,
    scores_path: PathBuf,
    sound: Box<dyn SoundPlayer>,
    rng: StdRng,
}

impl App {
    fn new(settings: Settings, data_dir: &Path, seed: Option<u64>) -> Self {
        let scores_path = settings.scores_path(data_dir);
        let sound = audio::open_player(&settings);
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::info!(
            "Scores at {}, sound: {}, seed: {:?}, {} fps",
            scores_path.display(),
            sound.name(),
            seed,
            settings.frame_rate
        );

        Self {
            settings,
            scores_path,
            sound,
            rng,
        }
    }
}

fn main() -> io::Result<()> {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(CliAction::Play(args)) => args,
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliAction::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("Error: {}\n\n{}", message, USAGE);
            std::process::exit(1);
        }
    };

    // Without a home directory, keep everything next to the binary's cwd
    let dir = data_dir().unwrap_or_else(|e| {
        eprintln!("Warning: {}; using the current directory", e);
        PathBuf::from(".")
    });

    if let Err(e) = init_logging(&dir.join(LOG_FILENAME)) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("Starting {}", build_info::version_line());

    let settings = load_settings(&dir.join(SETTINGS_FILENAME), &args);
    let mut app = App::new(settings, &dir, args.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    // Always restore the terminal, even if the loop failed
    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        log::error!("Exiting on error: {}", e);
    }
    result
}

/// Load settings, writing the defaults on first run so they can be edited,
/// then fold in command-line overrides.
fn load_settings(path: &Path, args: &CliArgs) -> Settings {
    let mut settings: Settings = load_json_or_default(path);
    if !path.exists() {
        if let Err(e) = save_json(path, &settings) {
            log::warn!("Could not write {}: {}", path.display(), e);
        }
    }
    settings.apply(args);
    settings
}

/// Screen state machine: menu -> flight -> high scores -> menu.
fn run(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    let mut screen = Screen::Menu;
    loop {
        screen = match screen {
            Screen::Menu => {
                let best = load_highscores(&app.scores_path)?.first().copied();
                match wait_for_intent(terminal, |frame| {
                    ui::menu_scene::render_menu(frame, best)
                })? {
                    Intent::Confirm => Screen::Playing,
                    _ => return Ok(()),
                }
            }
            Screen::Playing => Screen::HighScores(run_session(terminal, app)?),
            Screen::HighScores(board) => {
                match wait_for_intent(terminal, |frame| {
                    ui::scores_scene::render_scores(frame, &board)
                })? {
                    Intent::Confirm => Screen::Menu,
                    _ => return Ok(()),
                }
            }
        };
    }
}

/// Redraw until the player confirms or quits.
fn wait_for_intent<F>(terminal: &mut Tui, render: F) -> io::Result<Intent>
where
    F: Fn(&mut Frame),
{
    loop {
        terminal.draw(|frame| render(frame))?;

        if event::poll(MENU_POLL)? {
            match input::map_event(&event::read()?) {
                Intent::Ignored => {}
                intent => return Ok(intent),
            }
        }
    }
}

/// Play one session at a fixed frame rate, then record the score.
///
/// Each frame: drain input, advance the world one tick, render, sleep out
/// the rest of the frame.
fn run_session(terminal: &mut Tui, app: &mut App) -> io::Result<ScoreBoard> {
    let mut world = World::new(WorldConfig::default(), &mut app.rng);
    let frame_duration = app.settings.frame_duration();
    log::info!("Session started");

    let ending = loop {
        let frame_start = Instant::now();

        // Input
        let mut abandoned = false;
        while event::poll(Duration::ZERO)? {
            match input::map_event(&event::read()?) {
                Intent::Quit => abandoned = true,
                intent => process_input(&mut world, intent.to_world_input()),
            }
        }
        if abandoned {
            break SessionEnding::Abandoned;
        }

        // Update
        let report = step(&mut world, &mut app.rng);
        tick_events::apply_world_events(&report.events, app.sound.as_mut());

        // Render
        terminal.draw(|frame| ui::play_scene::render_play(frame, &world))?;

        if let (StepOutcome::Stop, Some(cause)) = (report.outcome, world.hit_cause()) {
            break SessionEnding::Crashed(cause);
        }

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    };

    log::info!(
        "Session ended after {} ticks with score {} ({:?})",
        world.tick_count,
        world.score,
        ending
    );

    let standing = save_highscore(&app.scores_path, world.score)?;
    Ok(ScoreBoard {
        standing,
        last_score: world.score,
        ending,
    })
}
