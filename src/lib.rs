//! Optimal solver for the 3x3 sliding-tile puzzle (8-puzzle).
//!
//! A* search with a Manhattan-distance heuristic finds a shortest move
//! sequence from any solvable arrangement to the goal `1..8` with the blank
//! in the last cell. A scramble generator produces random-but-solvable
//! starting states, and [`SolutionPlayer`] exposes a found path for stepped
//! or animated playback by whatever front-end renders the board.

pub mod heuristic;
pub mod player;
pub mod scramble;
pub mod search;
pub mod state;

pub use heuristic::manhattan_distance;
pub use player::SolutionPlayer;
pub use scramble::{scramble, DEFAULT_SCRAMBLE_STEPS};
pub use search::{solve, SolutionPath};
pub use state::{neighbor_indices, InvalidConfiguration, PuzzleState, GRID_SIZE, TILE_COUNT};
