use holdem_enum::search::{enumerate, par_solutions, solutions, Problem};

/// N-queens: one queen per row, the path holds each row's column.
struct Queens(usize);

impl Queens {
    fn consistent(path: &[usize]) -> bool {
        let Some((&col, earlier)) = path.split_last() else {
            return true;
        };
        let row = earlier.len();
        earlier.iter().enumerate().all(|(r, &c)| c != col && row - r != col.abs_diff(c))
    }
}

impl Problem for Queens {
    type Item = usize;

    fn is_success(&self, path: &[usize]) -> bool {
        path.len() == self.0 && Self::consistent(path)
    }

    fn is_partial(&self, path: &[usize]) -> bool {
        path.len() < self.0 && Self::consistent(path)
    }

    fn options(&self) -> Vec<usize> {
        (0..self.0).collect()
    }
}

#[test]
fn queens_solution_counts() {
    assert_eq!(solutions(&Queens(4)).len(), 2);
    assert_eq!(solutions(&Queens(5)).len(), 10);
    assert_eq!(solutions(&Queens(6)).len(), 4);
}

#[test]
fn queens_four_in_emission_order() {
    assert_eq!(solutions(&Queens(4)), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
}

#[test]
fn pruning_stops_below_conflicts() {
    let stats = enumerate(&Queens(6), |_| {});
    assert_eq!(stats.solutions, 4);
    // far fewer than the 6^6 leaves of an unpruned walk
    assert!(stats.visited < 6usize.pow(4) as u64);
}

#[test]
fn parallel_queens_match() {
    for n in 1..=7 {
        assert_eq!(par_solutions(&Queens(n)), solutions(&Queens(n)));
    }
}

#[test]
fn trait_objects_work() {
    let problem: &dyn Problem<Item = usize> = &Queens(4);
    assert_eq!(solutions(problem).len(), 2);
}
