use std::error::Error as StdError;
use torlife_lib::{compute_updates, Coord, Error, Grid, Simulation, Topology, ALIVE, DEAD};

fn coords(pairs: &[(usize, usize)]) -> Vec<Coord> {
    pairs.iter().map(|&(row, col)| Coord::new(row, col)).collect()
}

#[test]
fn block_is_still() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(6, 6)?;
    sim.seed(&coords(&[(2, 2), (2, 3), (3, 2), (3, 3)]))?;
    for _ in 0..5 {
        assert!(sim.step().is_empty());
    }
    assert_eq!(sim.grid().population(), 4);
    Ok(())
}

#[test]
fn blinker_oscillates_with_period_two() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(8, 8)?;
    sim.seed(&coords(&[(3, 2), (3, 3), (3, 4)]))?;
    let horizontal = sim.grid().clone();
    sim.step();
    let vertical: Vec<_> = sim.grid().live_cells().collect();
    assert_eq!(vertical, coords(&[(2, 3), (3, 3), (4, 3)]));
    sim.step();
    assert_eq!(sim.grid(), &horizontal);
    Ok(())
}

#[test]
fn glider_translates_down_right() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(10, 10)?;
    sim.seed(&coords(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]))?;
    sim.run(4);
    let live: Vec<_> = sim.grid().live_cells().collect();
    assert_eq!(live, coords(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]));
    Ok(())
}

#[test]
fn glider_wraps_around_the_torus() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(10, 10)?;
    sim.seed(&coords(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]))?;
    let initial = sim.grid().clone();
    // 40 generations translate the glider by (10, 10), which is a full lap.
    sim.run(40);
    assert_eq!(sim.grid(), &initial);
    Ok(())
}

#[test]
fn topology_is_deterministic() -> Result<(), Box<dyn StdError>> {
    let first = Topology::new(7, 5)?;
    let second = Topology::new(7, 5)?;
    assert_eq!(first, second);
    for row in 0..7 {
        for col in 0..5 {
            let nbhd = first.neighbors(Coord::new(row, col));
            assert_eq!(nbhd.len(), 8);
            for neighbor in nbhd {
                assert!(neighbor.row < 7 && neighbor.col < 5);
            }
        }
    }
    Ok(())
}

#[test]
fn topology_canonical_order() -> Result<(), Box<dyn StdError>> {
    let topology = Topology::new(4, 4)?;
    assert_eq!(
        topology.neighbors(Coord::new(0, 0)),
        coords(&[(3, 3), (3, 0), (3, 1), (0, 3), (0, 1), (1, 3), (1, 0), (1, 1)]).as_slice()
    );
    assert_eq!(
        topology.neighbors(Coord::new(2, 1)),
        coords(&[(1, 0), (1, 1), (1, 2), (2, 0), (2, 2), (3, 0), (3, 1), (3, 2)]).as_slice()
    );
    Ok(())
}

#[test]
fn single_row_torus_wraps_to_itself() -> Result<(), Box<dyn StdError>> {
    let topology = Topology::new(1, 3)?;
    // With a single row, up and down both wrap back to row 0, so the cell
    // itself appears among its neighbors.
    assert_eq!(
        topology.neighbors(Coord::new(0, 0)),
        coords(&[(0, 2), (0, 0), (0, 1), (0, 2), (0, 1), (0, 2), (0, 0), (0, 1)]).as_slice()
    );
    Ok(())
}

#[test]
fn single_cell_torus_is_overcrowded() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(1, 1)?;
    sim.seed(&[Coord::new(0, 0)])?;
    // The cell is all eight of its own neighbors.
    assert_eq!(sim.step(), vec![Coord::new(0, 0)]);
    assert_eq!(sim.grid().population(), 0);
    Ok(())
}

#[test]
fn compute_updates_is_pure() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(5, 5)?;
    grid.flip_cells(&coords(&[(1, 1), (1, 2), (1, 3), (3, 3)]))?;
    let topology = Topology::new(5, 5)?;
    let snapshot = grid.clone();
    let first = compute_updates(&grid, &topology)?;
    assert_eq!(grid, snapshot);
    let second = compute_updates(&grid, &topology)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn flip_sets_have_no_duplicates() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(12, 12)?;
    // An r-pentomino evolves chaotically for a long time.
    sim.seed(&coords(&[(5, 6), (5, 7), (6, 5), (6, 6), (7, 6)]))?;
    for _ in 0..50 {
        let flips = sim.step();
        let mut deduped = flips.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), flips.len());
    }
    Ok(())
}

#[test]
fn dead_grid_stays_dead() -> Result<(), Box<dyn StdError>> {
    let mut sim = Simulation::new(9, 4)?;
    for _ in 0..10 {
        assert!(sim.step().is_empty());
    }
    assert_eq!(sim.grid().population(), 0);
    assert_eq!(sim.generation(), 10);
    Ok(())
}

#[test]
fn rejects_zero_dimensions() {
    assert_eq!(Grid::new(0, 5).err(), Some(Error::InvalidDimensions));
    assert_eq!(Topology::new(5, 0).err(), Some(Error::InvalidDimensions));
    assert!(Simulation::new(0, 0).is_err());
}

#[test]
fn rejects_out_of_bounds_seed() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(3, 3)?;
    let err = grid.flip_cells(&coords(&[(1, 1), (3, 0)])).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfBoundsCoordinate {
            coord: Coord::new(3, 0),
            height: 3,
            width: 3,
        }
    );
    // The in-bounds cell was not toggled either.
    assert_eq!(grid.population(), 0);
    Ok(())
}

#[test]
fn rejects_mismatched_topology() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::new(4, 4)?;
    let topology = Topology::new(4, 5)?;
    assert!(matches!(
        compute_updates(&grid, &topology),
        Err(Error::DimensionMismatch { .. })
    ));
    Ok(())
}

#[test]
fn get_and_set() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(2, 2)?;
    assert_eq!(grid.get(Coord::new(1, 1))?, DEAD);
    grid.set(Coord::new(1, 1), ALIVE)?;
    assert_eq!(grid.get(Coord::new(1, 1))?, ALIVE);
    assert!(grid.get(Coord::new(2, 0)).is_err());
    Ok(())
}

#[test]
fn plaintext_display() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(3, 4)?;
    grid.flip_cells(&coords(&[(0, 1), (2, 3)]))?;
    assert_eq!(grid.to_string(), ".o..\n....\n...o\n");
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn grid_snapshot_round_trip() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(4, 4)?;
    grid.flip_cells(&coords(&[(0, 0), (1, 2), (3, 3)]))?;
    let json = serde_json::to_string(&grid)?;
    let restored: Grid = serde_json::from_str(&json)?;
    assert_eq!(restored, grid);
    Ok(())
}
