//! Seed-pattern literals.

use torlife_lib::Coord;

/// Names of the built-in patterns, for the command line.
pub(crate) const NAMES: [&str; 6] = ["glider", "blinker", "block", "toad", "beacon", "r-pentomino"];

/// The live cells of a named pattern, anchored at the top-left corner.
pub(crate) fn by_name(name: &str) -> Option<Vec<Coord>> {
    let cells: &[(usize, usize)] = match name {
        "glider" => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        "blinker" => &[(0, 0), (0, 1), (0, 2)],
        "block" => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        "toad" => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        "beacon" => &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 2),
            (2, 3),
            (3, 2),
            (3, 3),
        ],
        "r-pentomino" => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        _ => return None,
    };
    Some(cells.iter().map(|&(row, col)| Coord::new(row, col)).collect())
}
