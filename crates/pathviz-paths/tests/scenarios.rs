use std::f64::consts::SQRT_2;

use pathviz_core::{Grid, Pos};
use pathviz_paths::{Algorithm, Search, SearchOptions, path_cost};

const EPS: f64 = 1e-9;

fn open(rows: i32, cols: i32, start: Pos, target: Pos) -> Grid {
    Grid::new(rows, cols, start, target).unwrap()
}

fn run(grid: &Grid, a: Algorithm, diag: bool) -> Search {
    let opts = SearchOptions::default().with_diagonal(diag);
    a.search(grid, grid.start(), grid.target(), &opts).unwrap()
}

fn assert_valid_path(grid: &Grid, path: &[Pos], diag: bool) {
    assert_eq!(path.first(), Some(&grid.start()));
    assert_eq!(path.last(), Some(&grid.target()));
    for w in path.windows(2) {
        let (dr, dc) = w[0].abs_delta(w[1]);
        let adjacent = if diag {
            dr.max(dc) == 1
        } else {
            dr + dc == 1
        };
        assert!(adjacent, "{} -> {} is not a legal step", w[0], w[1]);
        assert!(grid.is_passable(w[1]));
    }
}

#[test]
fn open_5x5_cardinal() {
    let g = open(5, 5, Pos::new(0, 0), Pos::new(4, 4));
    for a in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
        let s = run(&g, a, false);
        assert!(s.reached(), "{a}");
        assert_eq!(s.path().len(), 9, "{a}");
        assert_eq!(s.path_cost(&g), 8.0, "{a}");
        assert_valid_path(&g, &s.path(), false);
    }
    let dfs = run(&g, Algorithm::Dfs, false);
    assert!(dfs.reached());
    assert_valid_path(&g, &dfs.path(), false);
    assert!(dfs.path_cost(&g) >= 8.0);
}

#[test]
fn open_5x5_diagonal() {
    let g = open(5, 5, Pos::new(0, 0), Pos::new(4, 4));
    for a in [Algorithm::Dijkstra, Algorithm::AStar] {
        let s = run(&g, a, true);
        assert_eq!(s.path().len(), 5, "{a}");
        assert!((s.path_cost(&g) - 4.0 * SQRT_2).abs() < EPS, "{a}");
        assert!((s.traversal().distance(g.target()) - 4.0 * SQRT_2).abs() < EPS);
    }
    let bfs = run(&g, Algorithm::Bfs, true);
    assert_eq!(bfs.path().len(), 5);
}

#[test]
fn dijkstra_avoids_expensive_center() {
    let mut g = open(3, 3, Pos::new(1, 0), Pos::new(1, 2));
    g.set_cost(Pos::new(1, 1), 10).unwrap();

    let d = run(&g, Algorithm::Dijkstra, false);
    assert_eq!(d.path_cost(&g), 4.0);
    assert_eq!(d.path().len(), 5);
    assert!(!d.path().contains(&Pos::new(1, 1)));

    // BFS counts steps only and walks straight through.
    let b = run(&g, Algorithm::Bfs, false);
    assert_eq!(b.path(), vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);
    assert_eq!(b.path_cost(&g), 11.0);
}

#[test]
fn dijkstra_crosses_cheap_center() {
    let mut g = open(3, 3, Pos::new(1, 0), Pos::new(1, 2));
    g.set_cost(Pos::new(1, 1), 2).unwrap();
    for a in [Algorithm::Dijkstra, Algorithm::AStar] {
        let s = run(&g, a, false);
        assert_eq!(s.path_cost(&g), 3.0, "{a}");
        assert!(s.path().contains(&Pos::new(1, 1)), "{a}");
    }
}

#[test]
fn uniform_grids_agree_on_length_and_cost() {
    let cases = [
        (4, 7, Pos::new(0, 0), Pos::new(3, 6)),
        (6, 6, Pos::new(5, 0), Pos::new(0, 5)),
        (3, 9, Pos::new(1, 4), Pos::new(2, 8)),
        (7, 2, Pos::new(6, 1), Pos::new(0, 0)),
    ];
    for diag in [false, true] {
        for (rows, cols, start, target) in cases {
            let g = open(rows, cols, start, target);
            let reference = run(&g, Algorithm::Dijkstra, diag);
            for a in [Algorithm::AStar, Algorithm::Bfs] {
                let s = run(&g, a, diag);
                assert_eq!(s.path().len(), reference.path().len(), "{a} {rows}x{cols}");
                // With diagonals, BFS may trade a cardinal step for a
                // diagonal one of equal hop count but higher cost.
                if a.is_weighted() || !diag {
                    assert!((s.path_cost(&g) - reference.path_cost(&g)).abs() < EPS);
                }
            }
            let dfs = run(&g, Algorithm::Dfs, diag);
            assert_valid_path(&g, &dfs.path(), diag);
            assert!(dfs.path_cost(&g) + EPS >= reference.path_cost(&g));
        }
    }
}

#[test]
fn bfs_is_shortest_but_not_cheapest() {
    let g = Grid::parse(
        "
S99
.9.
..T",
    )
    .unwrap();
    let bfs = run(&g, Algorithm::Bfs, false);
    let dijkstra = run(&g, Algorithm::Dijkstra, false);
    assert_eq!(bfs.path().len(), dijkstra.path().len());
    assert_eq!(dijkstra.path_cost(&g), 4.0);
    assert!(bfs.path_cost(&g) >= dijkstra.path_cost(&g));

    let g = Grid::parse(
        "
.....
S999T
.....",
    )
    .unwrap();
    let bfs = run(&g, Algorithm::Bfs, false);
    let dijkstra = run(&g, Algorithm::Dijkstra, false);
    assert_eq!(bfs.path().len(), 5);
    assert_eq!(bfs.path_cost(&g), 28.0);
    assert_eq!(dijkstra.path().len(), 7);
    assert_eq!(dijkstra.path_cost(&g), 6.0);
}

#[test]
fn walled_in_target_is_unreachable() {
    // Cardinal walls are enough for 4-way movement.
    let g = Grid::parse(
        "
S....
..#..
.#T#.
..#..
.....",
    )
    .unwrap();
    for a in Algorithm::ALL {
        let s = run(&g, a, false);
        assert!(!s.reached(), "{a}");
        assert!(!s.visited().is_empty());
        assert!(!s.visited().contains(&g.target()));
        assert_eq!(s.path(), vec![g.target()]);
        assert_eq!(s.path_cost(&g), 0.0);
        assert_eq!(s.stats(&g).path_nodes, 0);
        assert_eq!(s.traversal().previous(g.target()), None);
    }
    // 8-way movement slips through the corners.
    assert!(run(&g, Algorithm::Bfs, true).reached());

    let g = Grid::parse(
        "
S....
.###.
.#T#.
.###.
.....",
    )
    .unwrap();
    for a in Algorithm::ALL {
        let s = run(&g, a, true);
        assert!(!s.reached(), "{a}");
        assert_eq!(s.visited().len(), 16, "{a}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let g = Grid::parse(
        "
S..#.....
.#.#.###.
.#...#...
.####.#5.
......#.T",
    )
    .unwrap();
    for diag in [false, true] {
        for a in Algorithm::ALL {
            let first = run(&g, a, diag);
            let second = run(&g, a, diag);
            assert_eq!(first.visited(), second.visited(), "{a}");
            assert_eq!(first.path(), second.path(), "{a}");
            assert!(first.reached());
            assert_valid_path(&g, &first.path(), diag);
        }
    }
}

#[test]
fn diagonal_movement_widens_and_shortens() {
    let g = open(5, 5, Pos::new(2, 2), Pos::new(0, 4));
    let center = Pos::new(2, 2);
    let four = pathviz_paths::neighbors(&g, center, false, |_| false);
    let eight = pathviz_paths::neighbors(&g, center, true, |_| false);
    assert_eq!(four.len(), 4);
    assert_eq!(eight.len(), 8);

    let cardinal = run(&g, Algorithm::Dijkstra, false);
    let diagonal = run(&g, Algorithm::Dijkstra, true);
    assert!(diagonal.path().len() < cardinal.path().len());
    assert!(diagonal.path_cost(&g) < cardinal.path_cost(&g));
}

#[test]
fn visitation_ends_with_target() {
    let g = open(4, 4, Pos::new(0, 0), Pos::new(3, 3));
    for a in Algorithm::ALL {
        let s = run(&g, a, false);
        assert_eq!(s.visited().first(), Some(&g.start()));
        assert_eq!(s.visited().last(), Some(&g.target()));
        let mut seen = s.visited().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), s.visited().len(), "{a} finalized a node twice");
    }
}

#[test]
fn weighted_distance_matches_path_cost() {
    let g = Grid::parse(
        "
S.3..
.#5#.
.2..7
...#T",
    )
    .unwrap();
    for diag in [false, true] {
        for a in [Algorithm::Dijkstra, Algorithm::AStar] {
            let s = run(&g, a, diag);
            let d = s.traversal().distance(g.target());
            assert!((d - s.path_cost(&g)).abs() < EPS);
            assert!((path_cost(&g, &s.path()) - d).abs() < EPS);
        }
    }
}

#[test]
fn searches_leave_the_grid_untouched() {
    let g = Grid::parse("S.5\n#..\n..T").unwrap();
    let before = g.clone();
    for a in Algorithm::ALL {
        run(&g, a, true);
    }
    assert_eq!(g, before);
}
