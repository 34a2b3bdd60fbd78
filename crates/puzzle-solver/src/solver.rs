//! Breadth-first shortest-path solver shared by every puzzle.
//!
//! A puzzle plugs in by implementing [`Configuration`]. The solver explores
//! configurations in first-in-first-out order, deduplicating by structural
//! equality, and rebuilds the shortest move sequence from a predecessor map
//! once a solution is dequeued.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::Instant;

use log::debug;

/// One configuration of a puzzle: a node of the implicit search graph.
///
/// Equality and hashing must be structural so that the same position reached
/// through different move orders is recognised as already visited.
pub trait Configuration: Clone + Eq + Hash {
    /// Whether this configuration satisfies the puzzle's win condition.
    fn is_solution(&self) -> bool;

    /// Every configuration reachable with exactly one legal move, in a
    /// stable order. Each successor is an independent value; `self` is
    /// never modified.
    fn successors(&self) -> Vec<Self>;
}

/// Result of a single search
#[derive(Debug, Clone)]
pub struct SolverResult<C> {
    /// Every configuration produced, duplicates included (the start counts as one)
    pub total_configs: usize,
    /// Distinct configurations discovered (the start counts as one)
    pub unique_configs: usize,
    /// Start to solution inclusive; empty when no solution is reachable
    pub path: Vec<C>,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl<C> SolverResult<C> {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves in the solution, if there is one
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// The configuration one move closer to the solution.
    ///
    /// `None` when the start is already solved or no solution exists.
    pub fn next_step(&self) -> Option<&C> {
        self.path.get(1)
    }
}

/// Find a shortest move sequence from `start` to any solved configuration.
///
/// Among several shortest paths, the one discovered first under the
/// successor order of each configuration is returned.
pub fn solve<C: Configuration>(start: &C) -> SolverResult<C> {
    let start_time = Instant::now();

    let mut queue: VecDeque<C> = VecDeque::new();
    let mut predecessors: HashMap<C, Option<C>> = HashMap::new();
    queue.push_back(start.clone());
    predecessors.insert(start.clone(), None);

    let mut total_configs: usize = 1;
    let mut unique_configs: usize = 1;
    let mut path = Vec::new();

    while let Some(current) = queue.pop_front() {
        if current.is_solution() {
            path = reconstruct_path(&predecessors, current);
            break;
        }

        for next in current.successors() {
            total_configs += 1;
            if !predecessors.contains_key(&next) {
                unique_configs += 1;
                predecessors.insert(next.clone(), Some(current.clone()));
                queue.push_back(next);
            }
        }
    }

    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    debug!(
        "search finished: solved={} steps={:?} total={} unique={} in {}ms",
        !path.is_empty(),
        path.len().checked_sub(1),
        total_configs,
        unique_configs,
        time_elapsed_ms
    );

    SolverResult {
        total_configs,
        unique_configs,
        path,
        time_elapsed_ms,
    }
}

/// Walk predecessor links from `goal` back to the start, then reverse.
fn reconstruct_path<C: Configuration>(predecessors: &HashMap<C, Option<C>>, goal: C) -> Vec<C> {
    let mut path = vec![goal];
    while let Some(Some(prev)) = path.last().and_then(|c| predecessors.get(c)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Explicit adjacency-list graph for exercising the search on small shapes.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Node {
        id: usize,
        edges: &'static [&'static [usize]],
        goal: usize,
    }

    impl Node {
        fn new(id: usize, edges: &'static [&'static [usize]], goal: usize) -> Self {
            Self { id, edges, goal }
        }
    }

    impl Configuration for Node {
        fn is_solution(&self) -> bool {
            self.id == self.goal
        }

        fn successors(&self) -> Vec<Self> {
            self.edges[self.id]
                .iter()
                .map(|&id| Node::new(id, self.edges, self.goal))
                .collect()
        }
    }

    /// Cyclic ring where every position steps one forward and one back.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Ring {
        size: i32,
        at: i32,
        goal: i32,
    }

    impl Configuration for Ring {
        fn is_solution(&self) -> bool {
            self.at == self.goal
        }

        fn successors(&self) -> Vec<Self> {
            [1, -1]
                .iter()
                .map(|d| Ring {
                    at: (self.at + d).rem_euclid(self.size),
                    ..self.clone()
                })
                .collect()
        }
    }

    thread_local! {
        static EXPANSIONS: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts how many times successor generation runs.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Counted(usize);

    impl Configuration for Counted {
        fn is_solution(&self) -> bool {
            self.0 == 0
        }

        fn successors(&self) -> Vec<Self> {
            EXPANSIONS.with(|n| n.set(n.get() + 1));
            vec![Counted(self.0 - 1)]
        }
    }

    /// Length of the shortest path by exhaustive depth-first enumeration.
    fn brute_force_shortest(edges: &[&[usize]], from: usize, goal: usize) -> Option<usize> {
        fn walk(
            edges: &[&[usize]],
            at: usize,
            goal: usize,
            seen: &mut Vec<usize>,
            best: &mut Option<usize>,
        ) {
            if at == goal {
                let len = seen.len() - 1;
                if best.map_or(true, |b| len < b) {
                    *best = Some(len);
                }
                return;
            }
            for &next in edges[at] {
                if !seen.contains(&next) {
                    seen.push(next);
                    walk(edges, next, goal, seen, best);
                    seen.pop();
                }
            }
        }

        let mut best = None;
        walk(edges, from, goal, &mut vec![from], &mut best);
        best
    }

    const DIAMOND: &[&[usize]] = &[&[1, 2], &[3], &[3], &[]];

    #[test_log::test]
    fn test_diamond_shortest_path() {
        let result = solve(&Node::new(0, DIAMOND, 3));

        let ids: Vec<usize> = result.path.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 3]);
        assert_eq!(result.unique_configs, 4);
        assert_eq!(result.steps(), Some(2));
    }

    #[test_log::test]
    fn test_ring_goes_halfway() {
        let start = Ring {
            size: 12,
            at: 0,
            goal: 6,
        };
        let result = solve(&start);

        let positions: Vec<i32> = result.path.iter().map(|r| r.at).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(result.path.first(), Some(&start));
        // Both arcs are walked level by level, so every position is seen
        // once 6 is reached from 5 and again from 7.
        assert_eq!(result.unique_configs, 12);
        // 11 configurations expanded before the goal, two successors each
        assert_eq!(result.total_configs, 23);
        for pair in result.path.windows(2) {
            assert!(pair[0].successors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_start_already_solved() {
        EXPANSIONS.with(|n| n.set(0));
        let result = solve(&Counted(0));

        assert_eq!(result.path, vec![Counted(0)]);
        assert_eq!(result.total_configs, 1);
        assert_eq!(result.unique_configs, 1);
        assert_eq!(result.next_step(), None);
        assert_eq!(EXPANSIONS.with(|n| n.get()), 0);
    }

    #[test]
    fn test_dead_end_start() {
        const LONELY: &[&[usize]] = &[&[], &[]];
        let result = solve(&Node::new(0, LONELY, 1));

        assert!(result.path.is_empty());
        assert!(!result.is_solved());
        assert_eq!(result.steps(), None);
        assert_eq!(result.total_configs, 1);
        assert_eq!(result.unique_configs, 1);
    }

    #[test]
    fn test_unreachable_goal_counts_component() {
        // 0 <-> 1 <-> 2 form a component; 3 is isolated
        const GRAPH: &[&[usize]] = &[&[1], &[0, 2], &[1, 0], &[]];
        let result = solve(&Node::new(0, GRAPH, 3));

        assert!(result.path.is_empty());
        assert_eq!(result.unique_configs, 3);
        // one edge from 0, two from 1, two from 2
        assert_eq!(result.total_configs, 6);
    }

    #[test]
    fn test_revisited_start_not_recounted() {
        const CYCLE: &[&[usize]] = &[&[1], &[0, 2], &[]];
        let result = solve(&Node::new(0, CYCLE, 2));

        let ids: Vec<usize> = result.path.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(result.unique_configs, 3);
        assert_eq!(result.total_configs, 4);
        assert!(result.unique_configs <= result.total_configs);
    }

    #[test]
    fn test_matches_brute_force_on_dags() {
        const GRAPHS: &[&[&[usize]]] = &[
            &[&[1, 2], &[3], &[4], &[5], &[5], &[]],
            &[&[1], &[2, 3], &[4], &[4], &[]],
            &[&[1, 2, 3], &[4], &[4, 5], &[5], &[6], &[6], &[]],
            &[&[2, 1], &[3], &[1, 3], &[4], &[]],
        ];

        for (i, &edges) in GRAPHS.iter().enumerate() {
            let goal = edges.len() - 1;
            let result = solve(&Node::new(0, edges, goal));
            let expected = brute_force_shortest(edges, 0, goal);
            assert_eq!(result.steps(), expected, "graph {}", i);
        }
    }

    #[test]
    fn test_repeated_solves_agree() {
        let a = solve(&Node::new(0, DIAMOND, 3));
        let b = solve(&Node::new(0, DIAMOND, 3));

        assert_eq!(a.path, b.path);
        assert_eq!(a.total_configs, b.total_configs);
        assert_eq!(a.unique_configs, b.unique_configs);
    }
}
