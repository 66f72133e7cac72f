use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::heuristic::manhattan_distance;
use crate::state::{PuzzleState, TILE_COUNT};

/// States from start to goal inclusive; consecutive entries differ by exactly
/// one blank swap, so the move count is `len() - 1`.
pub type SolutionPath = Vec<PuzzleState>;

/// A discovered state in the arena. The parent link is an index into the
/// arena, forming a tree rooted at the start node; it is only followed to
/// reconstruct the final path.
struct Node {
    state: PuzzleState,
    g: u32,
    parent: Option<usize>,
}

/// Frontier ordering as one composite key: lowest `f` first, ties by lowest
/// `h`, remaining ties by highest `g`. Field order carries the precedence
/// through the derived lexicographic `Ord`; `BinaryHeap` is a max-heap, so
/// `f` and `h` are reversed.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Priority {
    f: Reverse<u32>,
    h: Reverse<u32>,
    g: u32,
}

struct OpenEntry {
    priority: Priority,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority)
    }
}

fn priority(g: u32, h: u32) -> Priority {
    Priority {
        f: Reverse(g + h),
        h: Reverse(h),
        g,
    }
}

/// A* over the puzzle state graph with unit move cost.
///
/// Returns a shortest path from `start` to the goal, or `None` if the goal is
/// unreachable (possible only for arrangements of the wrong permutation
/// parity; a legally scrambled board always solves). Each call owns its own
/// frontier and bookkeeping, so concurrent solves need no synchronization.
pub fn solve(start: &PuzzleState) -> Option<SolutionPath> {
    let mut nodes = vec![Node {
        state: *start,
        g: 0,
        parent: None,
    }];
    let start_h = manhattan_distance(start.tiles());

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        priority: priority(0, start_h),
        node: 0,
    });

    let mut best_g: HashMap<[u8; TILE_COUNT], u32> = HashMap::new();
    best_g.insert(start.key(), 0);
    let mut closed: HashSet<[u8; TILE_COUNT]> = HashSet::new();

    let mut expanded = 0u32;
    while let Some(entry) = open.pop() {
        let current = entry.node;
        let (state, g) = (nodes[current].state, nodes[current].g);
        if state.is_goal() {
            let path = reconstruct(&nodes, current);
            log::debug!(
                "solved in {} moves after expanding {} states",
                path.len() - 1,
                expanded
            );
            return Some(path);
        }
        if !closed.insert(state.key()) {
            // Stale frontier entry for an already expanded key.
            continue;
        }
        expanded += 1;

        for successor in state.successors() {
            let key = successor.key();
            if closed.contains(&key) {
                continue;
            }
            let tentative_g = g + 1;
            if best_g.get(&key).map_or(false, |&bg| tentative_g >= bg) {
                continue;
            }
            best_g.insert(key, tentative_g);

            let h = manhattan_distance(successor.tiles());
            nodes.push(Node {
                state: successor,
                g: tentative_g,
                parent: Some(current),
            });
            open.push(OpenEntry {
                priority: priority(tentative_g, h),
                node: nodes.len() - 1,
            });
        }
    }

    log::debug!("frontier exhausted after expanding {} states", expanded);
    None
}

/// Follows parent links from the goal node back to the start and reverses
/// the collected states.
fn reconstruct(nodes: &[Node], goal: usize) -> SolutionPath {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(index) = current {
        path.push(nodes[index].state);
        current = nodes[index].parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scramble::scramble;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn solving_the_goal_is_a_zero_move_path() {
        let path = solve(&PuzzleState::goal()).unwrap();
        assert_eq!(path.len(), 1);
        assert!(path[0].is_goal());
    }

    #[test]
    fn one_move_from_goal_solves_in_one_move() {
        let start = PuzzleState::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let path = solve(&start).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0], start);
        assert!(path[1].is_goal());
    }

    #[test]
    fn two_nonreversing_moves_solve_in_at_most_two() {
        // Blank walked 8 -> 7 -> 4 from the goal.
        let start = PuzzleState::goal().swap_blank(7).swap_blank(4);
        let path = solve(&start).unwrap();
        assert!(path.len() - 1 <= 2);
        assert!(path.last().unwrap().is_goal());
    }

    #[test]
    fn consecutive_path_states_differ_by_one_swap() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = scramble(25, &mut rng);
        let path = solve(&start).unwrap();
        for pair in path.windows(2) {
            let differing = pair[0]
                .tiles()
                .iter()
                .zip(pair[1].tiles().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
        }
    }

    #[test]
    fn path_length_never_exceeds_scramble_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for steps in [1, 5, 12, 20] {
            let start = scramble(steps, &mut rng);
            let path = solve(&start).unwrap();
            assert!(
                path.len() as i32 - 1 <= steps,
                "{} moves for a {}-step scramble",
                path.len() - 1,
                steps
            );
            assert!(path.last().unwrap().is_goal());
        }
    }

    #[test]
    fn path_length_is_bounded_below_by_the_heuristic() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = scramble(30, &mut rng);
        let path = solve(&start).unwrap();
        assert!(path.len() as u32 - 1 >= manhattan_distance(start.tiles()));
    }

    #[test]
    fn solve_is_idempotent_on_optimal_length() {
        let mut rng = StdRng::seed_from_u64(11);
        let start = scramble(18, &mut rng);
        let first = solve(&start).unwrap();
        let second = solve(&start).unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn odd_parity_arrangement_is_unsolvable() {
        // Two tiles swapped relative to the goal flips permutation parity.
        let start = PuzzleState::from_tiles(&[2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(solve(&start).is_none());
    }
}
