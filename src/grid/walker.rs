//! Cursor for relative navigation over a [`Grid2d`].
//!
//! A walker borrows its grid rather than owning it. `Walker<&Grid2d<T>>`
//! navigates and reads; `Walker<&mut Grid2d<T>>` can also write at its
//! position. The walker's position is always in bounds: construction validates
//! it and a rejected move leaves it untouched.

use std::ops::{Deref, DerefMut};

use glam::IVec2;

use crate::grid::Grid2d;
use crate::types::GridError;

/// Read-only walker.
pub type GridWalker<'a, T> = Walker<&'a Grid2d<T>>;
/// Walker that can write to its grid.
pub type GridWalkerMut<'a, T> = Walker<&'a mut Grid2d<T>>;

#[derive(Debug, Clone)]
pub struct Walker<G> {
    grid: G,
    /// Current cell; `x` is the row, `y` the column.
    position: IVec2,
}

impl<G> Walker<G> {
    /// Caller guarantees `position` has passed the grid's bounds check.
    pub(super) fn from_checked(grid: G, position: IVec2) -> Self {
        Self { grid, position }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }
}

impl<T, G> Walker<G>
where
    G: Deref<Target = Grid2d<T>>,
{
    /// Park a walker on `pos`, failing if it lies outside the grid.
    pub fn new(grid: G, pos: impl Into<IVec2>) -> Result<Self, GridError> {
        let position = pos.into();
        grid.check_bounds(position)?;
        Ok(Self { grid, position })
    }

    pub fn grid(&self) -> &Grid2d<T> {
        &self.grid
    }

    /// Move by `delta` and return the value at the new position.
    ///
    /// A rejected move leaves the walker where it was.
    pub fn move_by(&mut self, delta: impl Into<IVec2>) -> Result<Option<&T>, GridError> {
        let delta = delta.into();
        let (target, _) = self
            .grid
            .check_offset(self.position, delta)
            .inspect_err(|err| {
                log::trace!("walker at {} rejected move by {}: {}", self.position, delta, err)
            })?;
        self.position = target;
        Ok(self.value())
    }

    /// Value at the current position.
    pub fn value(&self) -> Option<&T> {
        self.grid.cell(self.position)
    }

    /// Value at `delta` from the current position, without moving.
    pub fn find(&self, delta: impl Into<IVec2>) -> Result<Option<&T>, GridError> {
        let (target, _) = self.grid.check_offset(self.position, delta)?;
        self.grid.find(target)
    }
}

impl<T, G> Walker<G>
where
    G: DerefMut<Target = Grid2d<T>>,
{
    /// Write `value` at the current position.
    pub fn set(&mut self, value: T) -> Result<(), GridError> {
        let position = self.position;
        self.grid.set(position, value)
    }
}
