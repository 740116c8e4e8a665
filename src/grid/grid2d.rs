use glam::IVec2;

use crate::grid::{GridWalker, GridWalkerMut, Walker};
use crate::types::{Axis, GridError, GridShape, offset};

/// Fixed-size row-major grid. Empty cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2d<T> {
    shape: GridShape,
    cells: Vec<Option<T>>,
}

impl<T> Grid2d<T> {
    /// Create a `rows` x `columns` grid with every cell empty.
    pub fn new(rows: u32, columns: u32) -> Self {
        let shape = GridShape::new(rows, columns);
        let cells = std::iter::repeat_with(|| None).take(shape.len()).collect();
        Self { shape, cells }
    }

    /// Adopt an existing row-major backing store.
    pub fn from_cells(shape: GridShape, cells: Vec<Option<T>>) -> Result<Self, GridError> {
        let expected_len = shape.len();
        if cells.len() != expected_len {
            return Err(GridError::InvalidShape(format!(
                "cell count {} does not match grid size {}x{}",
                cells.len(),
                shape.rows,
                shape.columns
            )));
        }

        Ok(Self { shape, cells })
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn rows(&self) -> u32 {
        self.shape.rows
    }

    pub fn columns(&self) -> u32 {
        self.shape.columns
    }

    /// Number of cells, set or not.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major backing store.
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Validate `pos` and return its linear index.
    ///
    /// Every coordinate-taking operation on the grid and its walkers passes
    /// through here. The row is checked before the column.
    pub fn check_bounds(&self, pos: impl Into<IVec2>) -> Result<usize, GridError> {
        let pos = pos.into();
        if pos.x < 0 || pos.x as u32 >= self.shape.rows {
            return Err(GridError::OutOfBounds {
                axis: Axis::Row,
                index: pos.x.into(),
                len: self.shape.rows,
            });
        }
        if pos.y < 0 || pos.y as u32 >= self.shape.columns {
            return Err(GridError::OutOfBounds {
                axis: Axis::Column,
                index: pos.y.into(),
                len: self.shape.columns,
            });
        }
        Ok(self.index(pos))
    }

    /// Validate the cell at `origin + delta`, returning it with its linear index.
    pub fn check_offset(
        &self,
        origin: IVec2,
        delta: impl Into<IVec2>,
    ) -> Result<(IVec2, usize), GridError> {
        let target = offset(origin, delta.into())?;
        let idx = self.check_bounds(target)?;
        Ok((target, idx))
    }

    pub fn set(&mut self, pos: impl Into<IVec2>, value: T) -> Result<(), GridError> {
        let idx = self.check_bounds(pos)?;
        self.cells[idx] = Some(value);
        Ok(())
    }

    /// Like [`Grid2d::set`], returning a mutable walker parked on the written cell.
    pub fn set_with_walker(
        &mut self,
        pos: impl Into<IVec2>,
        value: T,
    ) -> Result<GridWalkerMut<'_, T>, GridError> {
        let pos = pos.into();
        self.set(pos, value)?;
        Ok(Walker::from_checked(self, pos))
    }

    /// Value at `pos`, or `None` if the cell was never set.
    pub fn find(&self, pos: impl Into<IVec2>) -> Result<Option<&T>, GridError> {
        let idx = self.check_bounds(pos)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Like [`Grid2d::find`], returning a walker parked on the cell instead of its value.
    pub fn find_walker(&self, pos: impl Into<IVec2>) -> Result<GridWalker<'_, T>, GridError> {
        self.walker(pos)
    }

    pub fn walker(&self, pos: impl Into<IVec2>) -> Result<GridWalker<'_, T>, GridError> {
        Walker::new(self, pos)
    }

    pub fn walker_mut(&mut self, pos: impl Into<IVec2>) -> Result<GridWalkerMut<'_, T>, GridError> {
        Walker::new(self, pos)
    }

    /// Read a cell whose position has already been validated.
    pub(super) fn cell(&self, pos: IVec2) -> Option<&T> {
        self.cells[self.index(pos)].as_ref()
    }

    fn index(&self, pos: IVec2) -> usize {
        (pos.x as usize) * (self.shape.columns as usize) + (pos.y as usize)
    }
}
