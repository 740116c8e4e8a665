//! Coordinate arithmetic shared by the grid and its walkers.
//!
//! Positions are `IVec2` with `x` as the row and `y` as the column. They are
//! signed so that relative offsets can be expressed before validation.

use glam::IVec2;

use crate::types::{Axis, GridError};

/// Add `delta` to `origin`, rejecting results that do not fit in `i32`.
pub fn offset(origin: IVec2, delta: IVec2) -> Result<IVec2, GridError> {
    let x = origin
        .x
        .checked_add(delta.x)
        .ok_or(GridError::InvalidCoordinate {
            axis: Axis::Row,
            reason: "offset overflows i32",
        })?;
    let y = origin
        .y
        .checked_add(delta.y)
        .ok_or(GridError::InvalidCoordinate {
            axis: Axis::Column,
            reason: "offset overflows i32",
        })?;
    Ok(IVec2::new(x, y))
}

/// Convert container indices (outer = row, inner = column) to a position.
pub fn cell_from_indices(row: usize, column: usize) -> Result<IVec2, GridError> {
    let x = i32::try_from(row).map_err(|_| GridError::InvalidCoordinate {
        axis: Axis::Row,
        reason: "index does not fit in i32",
    })?;
    let y = i32::try_from(column).map_err(|_| GridError::InvalidCoordinate {
        axis: Axis::Column,
        reason: "index does not fit in i32",
    })?;
    Ok(IVec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_allows_negative_results() {
        let pos = offset(IVec2::new(0, 1), IVec2::new(-1, -2)).unwrap();
        assert_eq!(pos, IVec2::new(-1, -1));
    }

    #[test]
    fn offset_overflow_reports_axis() {
        let err = offset(IVec2::new(0, i32::MAX), IVec2::new(0, 1)).unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidCoordinate {
                axis: Axis::Column,
                ..
            }
        ));

        let err = offset(IVec2::new(i32::MIN, 0), IVec2::new(-1, 0)).unwrap_err();
        assert!(matches!(
            err,
            GridError::InvalidCoordinate { axis: Axis::Row, .. }
        ));
    }

    #[test]
    fn oversized_index_is_invalid() {
        assert_eq!(cell_from_indices(2, 7).unwrap(), IVec2::new(2, 7));
        let too_big = (i32::MAX as usize) + 1;
        assert!(matches!(
            cell_from_indices(too_big, 0),
            Err(GridError::InvalidCoordinate { axis: Axis::Row, .. })
        ));
    }
}
