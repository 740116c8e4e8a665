use super::Grid2d;
use crate::types::{GridError, GridShape, cell_from_indices};

impl<T> Grid2d<T> {
    /// Populate the grid from nested rows: the outer index is the row, the
    /// inner index the column.
    ///
    /// Cells are written one at a time in row-major order. The first entry that
    /// fails the bounds check aborts the load and is returned as the error;
    /// cells written before it keep their new values.
    ///
    /// # Example
    ///
    /// ```
    /// use cellgrid::Grid2d;
    ///
    /// let mut grid = Grid2d::new(2, 2);
    /// grid.bulk_set([["0,0", "0,1"], ["1,0", "1,1"]]).unwrap();
    /// assert_eq!(grid.find((1, 0)).unwrap(), Some(&"1,0"));
    ///
    /// // The third row does not exist, but the first two are already written.
    /// let mut grid = Grid2d::new(2, 1);
    /// let err = grid.bulk_set([[1], [2], [3]]).unwrap_err();
    /// assert!(err.is_out_of_bounds());
    /// assert_eq!(grid.find((1, 0)).unwrap(), Some(&2));
    /// ```
    pub fn bulk_set<R, I>(&mut self, rows: R) -> Result<(), GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        log::debug!("bulk load into {}x{} grid", self.rows(), self.columns());
        let mut written = 0usize;
        for (x, row) in rows.into_iter().enumerate() {
            for (y, value) in row.into_iter().enumerate() {
                cell_from_indices(x, y)
                    .and_then(|pos| self.set(pos, value))
                    .inspect_err(|err| {
                        log::trace!("bulk load stopped after {written} cells: {err}")
                    })?;
                written += 1;
            }
        }
        Ok(())
    }

    /// Build a grid sized to fit `rows` exactly and load it.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let shape = GridShape::from_row_lengths(rows.iter().map(Vec::len))?;
        let mut grid = Self::new(shape.rows, shape.columns);
        grid.bulk_set(rows)?;
        Ok(grid)
    }
}
