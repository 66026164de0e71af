use crate::*;
use ndarray::Array2;

pub use random::*;

mod random;

/// Strategy seam for producing a finished board from a config.
pub trait FieldGenerator {
    fn generate(self, config: FieldConfig) -> Result<Minefield>;
}

/// Allocates an all-[`Cell::Empty`] `size × size` grid.
pub fn allocate(size: Coord) -> Result<Array2<Cell>> {
    if size == 0 {
        return Err(FieldError::InvalidSize);
    }
    Ok(Array2::default((size.into(), size.into())))
}

/// Marks every coordinate in `mines` as a [`Cell::Mine`].
///
/// Coordinates must be in bounds; the sampler and
/// [`Minefield::from_mine_coords`] both guarantee that.
pub fn insert_mines(
    mut cells: Array2<Cell>,
    mines: impl IntoIterator<Item = Coord2>,
) -> Array2<Cell> {
    for coords in mines {
        cells[coords.to_nd_index()] = Cell::Mine;
    }
    cells
}

/// Bumps the adjacency count of every in-bounds non-mine neighbor of each
/// mine. Per-cell bumps commute, so the mine iteration order never changes
/// the result.
pub fn annotate(
    mut cells: Array2<Cell>,
    mines: impl IntoIterator<Item = Coord2>,
) -> Array2<Cell> {
    for mine in mines {
        for coords in cells.iter_neighbors(mine) {
            let cell = &mut cells[coords.to_nd_index()];
            *cell = cell.bump();
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(size: Coord, mines: &[Coord2]) -> Minefield {
        Minefield::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn allocate_rejects_zero_size() {
        assert_eq!(allocate(0).unwrap_err(), FieldError::InvalidSize);
    }

    #[test]
    fn allocated_grid_is_all_empty() {
        let cells = allocate(5).unwrap();
        assert_eq!(cells.dim(), (5, 5));
        assert!(cells.iter().all(|&cell| cell == Cell::Empty));
    }

    #[test]
    fn field_without_mines_stays_all_empty() {
        let field = field(5, &[]);
        assert_eq!(field.mine_count(), 0);
        for row in field.iter_rows() {
            assert!(row.iter().all(|&cell| cell == Cell::Empty));
        }
    }

    #[test]
    fn single_cell_field_with_one_mine() {
        let field = field(1, &[(0, 0)]);
        assert_eq!(field[(0, 0)], Cell::Mine);
        assert_eq!(field.total_cells(), 1);
    }

    #[test]
    fn saturated_field_is_all_mines_with_no_counts() {
        let field = field(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(field.mine_count(), 4);
        for row in field.iter_rows() {
            assert!(row.iter().all(|&cell| cell == Cell::Mine));
        }
    }

    #[test]
    fn diagonal_mines_annotate_the_expected_cells() {
        let field = field(3, &[(0, 0), (2, 2)]);

        assert_eq!(field[(0, 0)], Cell::Mine);
        assert_eq!(field[(2, 2)], Cell::Mine);
        assert_eq!(field[(0, 1)], Cell::Count(1));
        assert_eq!(field[(1, 0)], Cell::Count(1));
        assert_eq!(field[(1, 1)], Cell::Count(2));
        assert_eq!(field[(1, 2)], Cell::Count(1));
        assert_eq!(field[(2, 1)], Cell::Count(1));
        assert_eq!(field[(0, 2)], Cell::Empty);
        assert_eq!(field[(2, 0)], Cell::Empty);
    }

    #[test]
    fn annotation_is_independent_of_mine_order() {
        let mines = [(0, 0), (1, 2), (2, 2), (3, 0)];
        let forward = {
            let cells = insert_mines(allocate(4).unwrap(), mines);
            annotate(cells, mines)
        };
        let reversed = {
            let cells = insert_mines(allocate(4).unwrap(), mines.iter().rev().copied());
            annotate(cells, mines.iter().rev().copied())
        };
        assert_eq!(forward, reversed);
    }

    #[test]
    fn every_count_matches_its_true_neighborhood() {
        let field = field(6, &[(0, 0), (0, 5), (2, 3), (3, 3), (3, 4), (5, 1)]);

        for row in 0..field.size() {
            for col in 0..field.size() {
                let cell = field[(row, col)];
                let mines_around = field
                    .iter_neighbors((row, col))
                    .filter(|&pos| field[pos].is_mine())
                    .count() as u8;
                match cell {
                    Cell::Mine => {}
                    Cell::Empty => assert_eq!(mines_around, 0),
                    Cell::Count(n) => {
                        assert!((1..=8).contains(&n));
                        assert_eq!(n, mines_around);
                    }
                }
            }
        }
    }
}
