//! Square minesweeper field construction: allocate an empty grid, place a
//! fixed number of mines at distinct random coordinates, and annotate every
//! non-mine neighbor with its adjacent-mine count. Rendering and click
//! handling belong to the consumer; the [`Minefield`] handed out here is
//! read-only.

#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod types;

/// Board parameters supplied by the caller at game start.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl FieldConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(FieldError::InvalidSize);
        }
        if self.mines > self.total_cells() {
            return Err(FieldError::TooManyMines);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size)
    }
}

impl Default for FieldConfig {
    /// The board the original game shipped with.
    fn default() -> Self {
        Self::new_unchecked(20, 50)
    }
}

/// A finished, fully annotated board. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Cell>,
}

impl Minefield {
    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Builds an annotated field from explicit mine coordinates. Duplicate
    /// coordinates collapse; out-of-bounds coordinates are rejected.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mines: MineSet = mine_coords.iter().copied().collect();
        for &(row, col) in &mines {
            if row >= size || col >= size {
                return Err(FieldError::InvalidCoords);
            }
        }

        let cells = allocate(size)?;
        let cells = insert_mines(cells, mines.iter().copied());
        let cells = annotate(cells, mines.iter().copied());
        Ok(Self::from_cells(cells))
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        total_cells(self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(FieldError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Rows in top-to-bottom order, for the view layer to walk.
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.outer_iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
