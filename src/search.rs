//! Generic backtracking enumeration.
//!
//! A [`Problem`] says which paths are complete solutions, which may still be
//! extended, and which options can extend a path. The enumerator walks every
//! path depth-first over a single buffer: push an option, recurse, pop.
//!
//! ```
//! use holdem_enum::search::{solutions, Problem};
//!
//! /// Ordered sequences of 1s and 2s that sum to a target.
//! struct Compositions(u32);
//!
//! impl Problem for Compositions {
//!     type Item = u32;
//!     fn is_success(&self, path: &[u32]) -> bool {
//!         path.iter().sum::<u32>() == self.0
//!     }
//!     fn is_partial(&self, path: &[u32]) -> bool {
//!         path.iter().sum::<u32>() < self.0
//!     }
//!     fn options(&self) -> Vec<u32> {
//!         vec![1, 2]
//!     }
//! }
//!
//! let found = solutions(&Compositions(3));
//! assert_eq!(found, vec![vec![1, 1, 1], vec![1, 2], vec![2, 1]]);
//! ```

use rayon::prelude::*;
use std::ops::AddAssign;

/// The capability set the enumerator needs from a domain.
///
/// `is_success` and `is_partial` must be pure functions of the path and the
/// problem's fixed state. `options` must return the same candidates on every
/// call, since it is asked again at every depth.
pub trait Problem {
    type Item: Clone;

    /// The path is a complete solution. Solutions are never extended further.
    fn is_success(&self, path: &[Self::Item]) -> bool;

    /// The path is valid but incomplete and may be extended.
    fn is_partial(&self, path: &[Self::Item]) -> bool;

    /// Candidates for the next element, in exploration order.
    fn options(&self) -> Vec<Self::Item>;
}

/// Node counts from one enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths evaluated, including the empty root path.
    pub visited: u64,
    pub solutions: u64,
    /// Paths that were neither a success nor partial.
    pub dead_ends: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visited += rhs.visited;
        self.solutions += rhs.solutions;
        self.dead_ends += rhs.dead_ends;
    }
}

struct Enumerator<'p, P, F>
where
    P: Problem + ?Sized,
{
    problem: &'p P,
    path: Vec<P::Item>,
    stats: SearchStats,
    on_solution: F,
}

impl<'p, P, F> Enumerator<'p, P, F>
where
    P: Problem + ?Sized,
    F: FnMut(&[P::Item]),
{
    fn new(problem: &'p P, path: Vec<P::Item>, on_solution: F) -> Self {
        Self { problem, path, stats: SearchStats::default(), on_solution }
    }

    fn explore(&mut self) {
        self.stats.visited += 1;
        if self.problem.is_success(&self.path) {
            self.stats.solutions += 1;
            log::trace!("solution #{} at depth {}", self.stats.solutions, self.path.len());
            (self.on_solution)(&self.path);
        } else if self.problem.is_partial(&self.path) {
            for option in self.problem.options() {
                self.path.push(option);
                self.explore();
                self.path.pop();
            }
        } else {
            self.stats.dead_ends += 1;
        }
    }
}

/// Walk every path of `problem`, calling `on_solution` for each success in
/// depth-first order.
pub fn enumerate<P, F>(problem: &P, on_solution: F) -> SearchStats
where
    P: Problem + ?Sized,
    F: FnMut(&[P::Item]),
{
    let mut enumerator = Enumerator::new(problem, Vec::new(), on_solution);
    enumerator.explore();
    let stats = enumerator.stats;
    log::debug!(
        "enumeration finished: {} visited, {} solutions, {} dead ends",
        stats.visited,
        stats.solutions,
        stats.dead_ends
    );
    stats
}

/// Collect every solution path in emission order.
pub fn solutions<P>(problem: &P) -> Vec<Vec<P::Item>>
where
    P: Problem + ?Sized,
{
    let mut found = Vec::new();
    enumerate(problem, |path| found.push(path.to_vec()));
    found
}

/// Like [`solutions`], but the first level of recursion is split across the
/// rayon thread pool. Every branch owns its own path buffer, and results are
/// returned in the same order [`solutions`] would produce them.
pub fn par_solutions<P>(problem: &P) -> Vec<Vec<P::Item>>
where
    P: Problem + Sync + ?Sized,
    P::Item: Send,
{
    let root: Vec<P::Item> = Vec::new();
    if problem.is_success(&root) {
        return vec![root];
    }
    if !problem.is_partial(&root) {
        return Vec::new();
    }

    let branches: Vec<(Vec<Vec<P::Item>>, SearchStats)> = problem
        .options()
        .into_par_iter()
        .map(|option| {
            let mut found = Vec::new();
            let stats = {
                let mut enumerator =
                    Enumerator::new(problem, vec![option], |path: &[P::Item]| {
                        found.push(path.to_vec())
                    });
                enumerator.explore();
                enumerator.stats
            };
            (found, stats)
        })
        .collect();

    let mut stats = SearchStats { visited: 1, ..SearchStats::default() };
    let mut found = Vec::new();
    for (branch, branch_stats) in branches {
        found.extend(branch);
        stats += branch_stats;
    }
    log::debug!(
        "parallel enumeration finished: {} visited, {} solutions, {} dead ends",
        stats.visited,
        stats.solutions,
        stats.dead_ends
    );
    found
}
