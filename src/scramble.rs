use rand::seq::SliceRandom;
use rand::Rng;

use crate::state::{neighbor_indices, PuzzleState};

/// Step count substituted when the caller asks for fewer than 1.
pub const DEFAULT_SCRAMBLE_STEPS: i32 = 20;

/// Random walk of `steps` legal blank moves starting from the goal, so the
/// result is always solvable. When more than one option remains, the cell the
/// blank just came from is excluded, preventing an immediate back-and-forth
/// that would waste a step. `steps < 1` falls back to
/// [`DEFAULT_SCRAMBLE_STEPS`].
///
/// The RNG is supplied by the caller; tests pass a seeded one for
/// reproducible walks.
pub fn scramble<R: Rng>(steps: i32, rng: &mut R) -> PuzzleState {
    scramble_walk(steps, rng).0
}

/// The walk itself, also reporting the trail of blank positions (initial
/// position first, then one entry per applied move).
fn scramble_walk<R: Rng>(steps: i32, rng: &mut R) -> (PuzzleState, Vec<usize>) {
    let steps = if steps < 1 {
        DEFAULT_SCRAMBLE_STEPS
    } else {
        steps
    };

    let mut state = PuzzleState::goal();
    let mut trail = vec![state.blank_index()];
    let mut previous: Option<usize> = None;

    for _ in 0..steps {
        let mut options = neighbor_indices(state.blank_index());
        if let Some(prev) = previous {
            if options.len() > 1 {
                options.retain(|&option| option != prev);
            }
        }
        let choice = match options.choose(rng) {
            Some(&choice) => choice,
            // Unreachable on this grid (every cell has at least two
            // neighbors), but an empty option set must not fail the walk.
            None => continue,
        };
        previous = Some(state.blank_index());
        state = state.swap_blank(choice);
        trail.push(choice);
    }

    (state, trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::solve;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn non_positive_steps_default_to_twenty() {
        for steps in [0, -5] {
            let mut rng = StdRng::seed_from_u64(1);
            let (state, trail) = scramble_walk(steps, &mut rng);
            assert_eq!(trail.len() as i32, DEFAULT_SCRAMBLE_STEPS + 1);
            assert!(solve(&state).is_some());
        }
    }

    #[test]
    fn scrambled_states_stay_solvable() {
        let mut rng = StdRng::seed_from_u64(99);
        for steps in [1, 3, 10, 25] {
            let state = scramble(steps, &mut rng);
            assert!(solve(&state).is_some(), "{}-step scramble", steps);
        }
    }

    #[test]
    fn one_step_scramble_solves_in_exactly_one_move() {
        let mut rng = StdRng::seed_from_u64(5);
        let state = scramble(1, &mut rng);
        assert_eq!(solve(&state).unwrap().len(), 2);
    }

    #[test]
    fn blank_never_returns_to_its_prior_position() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (_, trail) = scramble_walk(50, &mut rng);
            for window in trail.windows(3) {
                assert_ne!(
                    window[2], window[0],
                    "immediate reversal in trail {:?}",
                    trail
                );
            }
        }
    }

    #[test]
    fn same_seed_yields_same_walk() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        assert_eq!(scramble(30, &mut a), scramble(30, &mut b));
    }

    #[test]
    fn trail_matches_step_count() {
        let mut rng = StdRng::seed_from_u64(8);
        let (_, trail) = scramble_walk(7, &mut rng);
        assert_eq!(trail.len(), 8);
    }
}
