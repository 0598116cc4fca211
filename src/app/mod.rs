pub mod clock;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::game::{Command, Game};
use crate::ui::draw_game;
use clock::FrameClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Command(Command),
}

pub fn run(config: Config) -> Result<()> {
    // Shape table problems surface before the terminal is taken over.
    let mut game = Game::new(&config).context("invalid shape table")?;
    let mut screen = Screen::open()?;
    let mut clock = FrameClock::new(config.ticks_per_second);

    loop {
        let quit = frame(&mut game, pending_inputs()?);
        screen.draw(&game, &config.caption)?;
        if quit {
            return Ok(());
        }
        clock.wait();
    }
}

/// Key presses queued since the last frame, in arrival order.
fn pending_inputs() -> Result<Vec<Input>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                inputs.extend(input_for(key.code));
            }
        }
    }
    Ok(inputs)
}

/// Applies one frame's inputs, then ticks. Returns true once quit was seen;
/// inputs after the quit still apply and the tick still runs.
fn frame(game: &mut Game, inputs: impl IntoIterator<Item = Input>) -> bool {
    let mut quit = false;
    for input in inputs {
        match input {
            Input::Quit => quit = true,
            Input::Command(command) => {
                game.apply(command);
            }
        }
    }
    game.tick();
    quit
}

/// Raw-mode alternate screen; restored on drop, also on early error returns.
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    fn open() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, game: &Game, caption: &str) -> Result<()> {
        self.terminal
            .draw(|frame| draw_game(frame, game, caption))
            .context("failed to draw frame")?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn input_for(code: KeyCode) -> Option<Input> {
    let input = match code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Left | KeyCode::Char('h') => Input::Command(Command::Left),
        KeyCode::Right | KeyCode::Char('l') => Input::Command(Command::Right),
        KeyCode::Up | KeyCode::Char('k') => Input::Command(Command::RotateCw),
        KeyCode::Down | KeyCode::Char('j') => Input::Command(Command::RotateCcw),
        KeyCode::Char(' ') => Input::Command(Command::Drop),
        _ => return None,
    };
    Some(input)
}
