//! Grid dimensions.

use crate::types::GridError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GridShape {
    pub rows: u32,
    pub columns: u32,
}

impl GridShape {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Shape of a nested row listing: one row per outer entry, as wide as the
    /// longest inner entry.
    pub fn from_row_lengths(
        row_lengths: impl IntoIterator<Item = usize>,
    ) -> Result<Self, GridError> {
        let mut rows = 0usize;
        let mut columns = 0usize;
        for len in row_lengths {
            rows += 1;
            columns = columns.max(len);
        }

        Ok(Self {
            rows: dimension(rows, "rows")?,
            columns: dimension(columns, "columns")?,
        })
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.columns as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn dimension(value: usize, name: &str) -> Result<u32, GridError> {
    u32::try_from(value)
        .map_err(|_| GridError::InvalidShape(format!("{name} count {value} does not fit in u32")))
}
