use crate::state::{BLANK, GRID_SIZE, TILE_COUNT};

/// Sum over all non-blank tiles of the row and column distance to the tile's
/// goal cell (`value - 1` as a row-major index).
///
/// Never overestimates the true remaining move count, and a single move
/// changes the total by at most 1, so A* guided by this estimate returns
/// optimal paths.
pub fn manhattan_distance(tiles: &[u8; TILE_COUNT]) -> u32 {
    let mut total = 0;
    for (index, &value) in tiles.iter().enumerate() {
        if value == BLANK {
            continue;
        }
        let goal = (value - 1) as usize;
        total += (index / GRID_SIZE).abs_diff(goal / GRID_SIZE);
        total += (index % GRID_SIZE).abs_diff(goal % GRID_SIZE);
    }
    total as u32
}
