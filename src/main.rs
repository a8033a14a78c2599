mod ai;
mod config;
mod debug;
mod game;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ai::{Controller, Tracker};
use config::Config;
use game::{poll_input, Dimension, InputAction, PlayState, Side};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug_enabled = parse_args(&args);

    debug::init(debug_enabled).context("failed to initialize debug log")?;
    debug::log("SESSION_START", "pongtty starting");

    let config = config::load_config()?;

    // Terminal setup. Failing here is the one fatal error class; anyhow
    // prints the message and we never enter the game loop.
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        // Release events are needed to stop the paddle when a key comes up.
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES),
    )
    .context("failed to set up terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_game(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    debug::log("SESSION_END", "pongtty exiting");
    result
}

fn parse_args(args: &[String]) -> bool {
    let mut debug_enabled = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug_enabled = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    debug_enabled
}

fn print_usage(program: &str) {
    println!("pongtty - terminal Pong against a scripted opponent");
    println!();
    println!("Usage:");
    println!("  {}             # Play", program);
    println!("  {} --debug     # Play with diagnostic logging to /tmp", program);
    println!();
    println!("Controls: Up/Down move the paddle, Q or Esc quits.");
    println!("First to 30 points wins the round.");
}

fn run_game<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, config: &Config) -> Result<()> {
    let frame_budget = Duration::from_millis(1000 / config.display.target_fps.max(1));
    let epoch = Instant::now();

    let field = Dimension {
        width: config.physics.field_width,
        height: config.physics.field_height,
    };
    let mut play = PlayState::new(field, &config.physics, 0);
    let mut opponent = Tracker::new();

    debug::log(
        "GAME_START",
        &format!("Game loop started vs {}", opponent.name()),
    );

    loop {
        let frame_start = Instant::now();

        // Drain input; the last event wins within a frame.
        for action in poll_input(&config.keybindings)? {
            match action {
                InputAction::Quit => return Ok(()),
                InputAction::PaddleUp => play.player.dy = -1.0,
                InputAction::PaddleDown => play.player.dy = 1.0,
                InputAction::PaddleStop => play.player.dy = 0.0,
            }
        }

        // One authoritative simulation step at the real current time. The
        // delta comes from the state's own last-update timestamp, not from
        // this loop's pacing.
        let now_ms = epoch.elapsed().as_millis() as u64;
        let events = play.tick(now_ms, &mut opponent);

        if let Some(side) = events.point_scored {
            debug::log(
                "SCORE",
                &format!(
                    "{:?} scored, player {} enemy {}",
                    side, play.score.player, play.score.enemy
                ),
            );
        }

        terminal.draw(|f| ui::render(f, &play, &config.display))?;

        // Sleep off the rest of the frame budget; an overrunning frame gets
        // no catch-up, the next delta simply comes out larger.
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }

        if let Some(winner) = play.round_winner() {
            debug::log("ROUND_END", &format!("{:?} won the round", winner));
            if !show_round_end(terminal, &play, config, winner)? {
                return Ok(());
            }
            opponent.reset();
            play.reset_round(epoch.elapsed().as_millis() as u64);
        }
    }
}

/// Show the round-end message over the final frame and block until a key is
/// pressed, the terminal analogue of a modal message box. Returns false if
/// the player chose to quit instead of going another round.
fn show_round_end<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    play: &PlayState,
    config: &Config,
    winner: Side,
) -> Result<bool> {
    let message = match winner {
        Side::Player => ui::OverlayMessage::success(vec![
            "You won! Go another round.".to_string(),
            String::new(),
            "Any key to continue  |  Q to quit".to_string(),
        ]),
        Side::Enemy => ui::OverlayMessage::warning(vec![
            "You lost. Try again.".to_string(),
            String::new(),
            "Any key to continue  |  Q to quit".to_string(),
        ]),
    }
    .with_title("End Round".to_string());

    terminal.draw(|f| {
        ui::render(f, play, &config.display);
        ui::render_overlay(f, &message, f.area());
    })?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                let quit = key.code == KeyCode::Esc
                    || matches!(key.code, KeyCode::Char(c)
                        if config.keybindings.quit.chars().next()
                            .is_some_and(|b| b.eq_ignore_ascii_case(&c)));
                return Ok(!quit);
            }
        }
    }
}
