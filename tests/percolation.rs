extern crate pathfinding;
extern crate percolation;

use pathfinding::prelude::bfs_reach;
use percolation::*;

// Reference answer: breadth-first search from a node sitting above row 0.
fn bfs_percolates(snapshot: &Snapshot) -> bool {
    let n = snapshot.size();
    let successors = |node: &Option<(usize, usize)>| -> Vec<Option<(usize, usize)>> {
        match *node {
            None => (0..n).filter(|&c| snapshot.is_open(0, c) == Some(true)).map(|c| Some((0, c))).collect(),
            Some((r, c)) => {
                let mut next = Vec::new();
                if r > 0 { next.push((r - 1, c)); }
                if r + 1 < n { next.push((r + 1, c)); }
                if c > 0 { next.push((r, c - 1)); }
                if c + 1 < n { next.push((r, c + 1)); }
                next.into_iter().filter(|&(r, c)| snapshot.is_open(r, c) == Some(true)).map(Some).collect()
            }
        }
    };
    bfs_reach(None, successors).any(|node| match node {
        Some((r, _)) => r == n - 1,
        None => false,
    })
}

#[test]
fn matches_breadth_first_search() {
    for &n in &[1usize, 2, 5, 17] {
        for &p in &[0.3, 0.55, 0.6, 0.75] {
            for seed in 0..10u64 {
                let trial = run_trial(n, p, seed).unwrap();
                let snapshot = trial.snapshot();
                assert_eq!(trial.percolates, bfs_percolates(&snapshot),
                    "n={} p={} seed={}", n, p, seed);
                assert_eq!(snapshot.percolates(), trial.percolates);
            }
        }
    }
}

#[test]
fn opening_is_monotonic() {
    let n = 6;
    let mut grid = Grid::new(n).unwrap();
    let mut source = SeededUniform::new(11);
    let mut seen_open: Vec<Site> = Vec::new();
    let mut percolated = false;
    for _ in 0..400 {
        let row = (source.uniform() * n as f64) as isize;
        let col = (source.uniform() * n as f64) as isize;
        let site = Site::new(row, col);
        grid.open(site).unwrap();
        seen_open.push(site);
        for s in &seen_open {
            assert!(grid.is_open(*s).unwrap());
        }
        if percolated {
            assert!(grid.percolates());
        }
        percolated = grid.percolates();
    }
    assert!(percolated);
}

#[test]
fn incremental_opens_agree_with_search() {
    let n = 8;
    let mut grid = Grid::new(n).unwrap();
    let mut source = SeededUniform::new(2024);
    for _ in 0..120 {
        let row = (source.uniform() * n as f64) as isize;
        let col = (source.uniform() * n as f64) as isize;
        grid.open(Site::new(row, col)).unwrap();
        let snapshot = grid.snapshot();
        assert_eq!(grid.percolates(), bfs_percolates(&snapshot));
    }
}

#[test]
fn barrier_and_column() {
    let mut barrier = Grid::new(3).unwrap();
    for &(r, c) in &[(0, 0), (0, 1), (0, 2), (2, 0), (2, 1), (2, 2)] {
        barrier.open(Site::new(r, c)).unwrap();
    }
    assert!(!barrier.percolates());

    let mut column = Grid::new(3).unwrap();
    for r in 0..3 {
        column.open(Site::new(r, 0)).unwrap();
    }
    assert!(column.percolates());
}

#[test]
fn bounds_are_enforced() {
    let n = 4;
    let mut grid = Grid::new(n).unwrap();
    assert!(grid.open(Site::new(-1, 0)).is_err());
    assert!(grid.open(Site::new(n as isize, 0)).is_err());

    let ds = DisjointSet::make_singletons(n).unwrap();
    match ds.find(n) {
        Err(PercolationError::OutOfRange { index, bound }) => {
            assert_eq!((index, bound), (n, n));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(grid.open_count(), 0);
}

#[test]
fn replay_from_seed() {
    let first = run_trial(25, 0.593, 1234).unwrap();
    let second = run_trial(25, 0.593, 1234).unwrap();
    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.percolates, second.percolates);

    let frame = TextRenderer::default().render(1, &first.snapshot());
    assert!(frame.ends_with(&format!("Problem 1: Percolates - {}", first.percolates)));
    assert_eq!(frame.lines().count(), 26);
}
