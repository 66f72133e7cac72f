use std::env;
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use rand::thread_rng;

use eight_puzzle::{
    neighbor_indices, scramble, solve, PuzzleState, SolutionPlayer, DEFAULT_SCRAMBLE_STEPS,
    GRID_SIZE,
};

const ANIMATION_DELAY: Duration = Duration::from_millis(350);

struct App {
    state: PuzzleState,
    player: SolutionPlayer,
    scramble_steps: i32,
    status: String,
}

impl App {
    fn restart(&mut self) {
        self.state = PuzzleState::goal();
        self.player.reset();
        self.status = "Goal state loaded.".into();
    }

    fn shuffle(&mut self) {
        self.state = scramble(self.scramble_steps, &mut thread_rng());
        self.player.reset();
        self.status = format!("Scrambled with {} moves.", self.scramble_steps);
    }

    /// Slides the neighboring tile into the blank in the given direction, if
    /// that stays on the board. Any manual move invalidates a held solution.
    fn move_blank(&mut self, code: KeyCode) {
        let blank = self.state.blank_index();
        let row = blank / GRID_SIZE;
        let col = blank % GRID_SIZE;
        let target = match code {
            KeyCode::Up if row > 0 => blank - GRID_SIZE,
            KeyCode::Down if row < GRID_SIZE - 1 => blank + GRID_SIZE,
            KeyCode::Left if col > 0 => blank - 1,
            KeyCode::Right if col < GRID_SIZE - 1 => blank + 1,
            _ => return,
        };
        if !neighbor_indices(blank).contains(&target) {
            return;
        }
        self.state = self.state.swap_blank(target);
        self.player.reset();
        if self.state.is_goal() {
            self.status = "Solved!".into();
        }
    }

    /// Solves the current state, then plays the path back one state per
    /// animation tick. Input is not read until the playback completes.
    fn solve_animated(&mut self, stdout: &mut Stdout) -> io::Result<()> {
        if self.state.is_goal() {
            self.status = "Already at the goal state.".into();
            return Ok(());
        }
        self.status = "Searching (A* + Manhattan)...".into();
        draw(stdout, self)?;

        let started = Instant::now();
        match solve(&self.state) {
            Some(path) => {
                let elapsed = started.elapsed();
                self.status = format!(
                    "Solution in {} moves ({:.2} ms).",
                    path.len() - 1,
                    elapsed.as_secs_f64() * 1000.0
                );
                self.player.set_path(path.clone());
                for state in path {
                    self.state = state;
                    draw(stdout, self)?;
                    thread::sleep(ANIMATION_DELAY);
                }
                // The playback already walked the whole path; stepping must
                // continue from the final frame, not rewind to the start.
                self.player.skip_to_end();
                // Drop key presses queued up during the animation.
                while event::poll(Duration::from_millis(0))? {
                    let _ = event::read()?;
                }
            }
            None => self.status = "No solution found.".into(),
        }
        Ok(())
    }

    fn step(&mut self) {
        let had_path = self.player.path().is_some();
        match self.player.step_forward(&self.state) {
            Some(state) => {
                self.state = state;
                if !had_path {
                    let moves = self.player.path().map_or(0, |path| path.len() - 1);
                    self.status = format!("Solution in {} moves; stepping.", moves);
                }
            }
            None if self.player.path().is_some() => {
                self.status = "End of solution.".into();
            }
            None => self.status = "No solution found.".into(),
        }
    }
}

fn draw(stdout: &mut Stdout, app: &App) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(stdout, Print("8-puzzle (A* + Manhattan)"))?;

    let mut line = 2u16;
    for row in app.state.tiles().chunks(GRID_SIZE) {
        let rendered: String = row
            .iter()
            .map(|&value| {
                if value == 0 {
                    "  . ".to_string()
                } else {
                    format!(" {:2} ", value)
                }
            })
            .collect();
        queue!(stdout, MoveTo(0, line), Print(rendered))?;
        line += 1;
    }

    queue!(
        stdout,
        MoveTo(0, 6),
        Print(format!("scramble steps: {}", app.scramble_steps)),
        MoveTo(0, 7),
        Print(&app.status),
        MoveTo(0, 9),
        Print("arrows: move  s: scramble  +/-: steps  a: solve  space: step  g: reset  q: quit")
    )?;
    stdout.flush()
}

fn run(stdout: &mut Stdout, app: &mut App) -> io::Result<()> {
    loop {
        draw(stdout, app)?;
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('g') => app.restart(),
                KeyCode::Char('s') => app.shuffle(),
                KeyCode::Char('+') => app.scramble_steps = (app.scramble_steps + 5).min(995),
                KeyCode::Char('-') => app.scramble_steps = (app.scramble_steps - 5).max(1),
                KeyCode::Char('a') => app.solve_animated(stdout)?,
                KeyCode::Char(' ') => app.step(),
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                    app.move_blank(key.code)
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    // Optional argument: initial scramble step count. Anything non-numeric
    // or below 1 falls back to the default.
    let scramble_steps = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i32>().ok())
        .filter(|&steps| steps >= 1)
        .unwrap_or(DEFAULT_SCRAMBLE_STEPS);

    let mut app = App {
        state: PuzzleState::goal(),
        player: SolutionPlayer::new(),
        scramble_steps,
        status: "Ready.".into(),
    };

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = run(&mut stdout, &mut app);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}
