use crate::search::{solve, SolutionPath};
use crate::state::PuzzleState;

/// Holds a found solution path and a cursor for step-wise traversal.
///
/// Playback timing is the front-end's concern; the player only hands out
/// successive states. The front-end must call [`SolutionPlayer::reset`]
/// whenever the puzzle state changes outside of solving (manual move, new
/// scramble, restart), so a stale path is never replayed.
#[derive(Default)]
pub struct SolutionPlayer {
    path: Option<SolutionPath>,
    cursor: usize,
}

impl SolutionPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The held path, if any.
    pub fn path(&self) -> Option<&SolutionPath> {
        self.path.as_ref()
    }

    /// Stores a path found elsewhere (e.g. before an animated playback) and
    /// rewinds the cursor.
    pub fn set_path(&mut self, path: SolutionPath) {
        self.path = Some(path);
        self.cursor = 0;
    }

    /// Yields the next state of the solution, solving from `current` first if
    /// no path is held. Returns `None` once the path is exhausted, or when
    /// `current` is unsolvable.
    pub fn step_forward(&mut self, current: &PuzzleState) -> Option<PuzzleState> {
        if self.path.is_none() {
            self.path = solve(current);
            self.cursor = 0;
        }
        let path = self.path.as_ref()?;
        if self.cursor < path.len() {
            let state = path[self.cursor];
            self.cursor += 1;
            Some(state)
        } else {
            None
        }
    }

    /// Moves the cursor past the last state of the held path, so stepping
    /// continues from the end instead of rewinding. Used after a playback
    /// that already walked the board through the whole path.
    pub fn skip_to_end(&mut self) {
        if let Some(path) = &self.path {
            self.cursor = path.len();
        }
    }

    /// Drops any held path and rewinds the cursor.
    pub fn reset(&mut self) {
        self.path = None;
        self.cursor = 0;
    }
}
