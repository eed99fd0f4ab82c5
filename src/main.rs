mod collision;
mod game;
mod maze;
mod render;

use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

use game::{Command, Direction, Game};
use render::Renderer;

const DEFAULT_FRAME_MS: u64 = 80;
const MIN_FRAME_MS: u64 = 20;
const MAX_FRAME_MS: u64 = 400;
const FRAME_MS_STEP: u64 = 20;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout) -> io::Result<()> {
    let mut game = Game::new();
    let mut renderer = Renderer::new();
    let mut frame_ms = read_speed_settings();

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('+') => {
                            frame_ms = frame_ms.saturating_sub(FRAME_MS_STEP).max(MIN_FRAME_MS);
                        }
                        KeyCode::Char('-') => {
                            frame_ms = (frame_ms + FRAME_MS_STEP).min(MAX_FRAME_MS);
                        }
                        code => {
                            if let Some(command) = command_for(code) {
                                game.apply(command);
                            }
                        }
                    },
                    _ => {}
                }
            }
        }

        renderer.draw(stdout, &game)?;

        let elapsed = frame_start.elapsed();
        let frame_time = Duration::from_millis(frame_ms);
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char('r') => Some(Command::Reset),
        _ => None,
    }
}

fn read_speed_settings() -> u64 {
    std::env::var("MUNCHER_FRAME_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_FRAME_MS)
}
