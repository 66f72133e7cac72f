use std::fmt;

use thiserror::Error;

/// Side length of the board.
pub const GRID_SIZE: usize = 3;
/// Number of cells, blank included.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The blank cell is represented by 0.
pub const BLANK: u8 = 0;

/// Row-major goal arrangement.
const GOAL_TILES: [u8; TILE_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, BLANK];

/// The tile sequence was not a permutation of `0..=8` of length 9.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid configuration {0:?}: expected a permutation of 0..=8")]
pub struct InvalidConfiguration(pub Vec<u8>);

/// A snapshot of tile positions on the 3x3 board.
///
/// Value type: every transformation produces a new state. The tile array
/// itself serves as the canonical key for visited/best-cost maps, since two
/// states are equal iff their tile sequences are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    tiles: [u8; TILE_COUNT],
    blank: usize,
}

impl PuzzleState {
    /// The solved arrangement `1 2 3 / 4 5 6 / 7 8 _`.
    pub fn goal() -> Self {
        Self {
            tiles: GOAL_TILES,
            blank: TILE_COUNT - 1,
        }
    }

    /// Builds a state from a raw tile sequence, locating the blank while
    /// validating that the input is a permutation of `0..=8`.
    pub fn from_tiles(values: &[u8]) -> Result<Self, InvalidConfiguration> {
        if values.len() != TILE_COUNT {
            return Err(InvalidConfiguration(values.to_vec()));
        }
        let mut seen = [false; TILE_COUNT];
        let mut blank = TILE_COUNT;
        for (index, &value) in values.iter().enumerate() {
            if value as usize >= TILE_COUNT || seen[value as usize] {
                return Err(InvalidConfiguration(values.to_vec()));
            }
            seen[value as usize] = true;
            if value == BLANK {
                blank = index;
            }
        }
        let mut tiles = [0; TILE_COUNT];
        tiles.copy_from_slice(values);
        Ok(Self { tiles, blank })
    }

    pub fn tiles(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }

    /// Position of the blank in the tile array.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Canonical key for lookup structures.
    pub fn key(&self) -> [u8; TILE_COUNT] {
        self.tiles
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// New state with the blank swapped into `index`, which must be adjacent
    /// to the blank.
    pub fn swap_blank(&self, index: usize) -> Self {
        debug_assert!(neighbor_indices(self.blank).contains(&index));
        let mut tiles = self.tiles;
        tiles.swap(self.blank, index);
        Self {
            tiles,
            blank: index,
        }
    }

    /// All states reachable by one blank swap: 2 from a corner, 3 from an
    /// edge, 4 from the center.
    pub fn successors(&self) -> Vec<PuzzleState> {
        neighbor_indices(self.blank)
            .into_iter()
            .map(|index| self.swap_blank(index))
            .collect()
    }
}

/// Cells adjacent to `index` on the 3x3 grid: up/down/left/right, respecting
/// the edges. No diagonals, no wraparound.
pub fn neighbor_indices(index: usize) -> Vec<usize> {
    let row = index / GRID_SIZE;
    let col = index % GRID_SIZE;
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push(index - GRID_SIZE);
    }
    if row < GRID_SIZE - 1 {
        neighbors.push(index + GRID_SIZE);
    }
    if col > 0 {
        neighbors.push(index - 1);
    }
    if col < GRID_SIZE - 1 {
        neighbors.push(index + 1);
    }
    neighbors
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(GRID_SIZE) {
            for &value in row {
                if value == BLANK {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:2} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
