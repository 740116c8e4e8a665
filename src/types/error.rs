use std::fmt;

use thiserror::Error;

/// Grid axis named in coordinate errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GridError {
    #[error("{axis} {index} is out of bounds for length {len}")]
    OutOfBounds { axis: Axis, index: i64, len: u32 },
    #[error("invalid {axis} coordinate: {reason}")]
    InvalidCoordinate { axis: Axis, reason: &'static str },
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GridError {
    /// True for coordinates that are well formed but fall outside the grid.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_axis() {
        let err = GridError::OutOfBounds {
            axis: Axis::Column,
            index: -1,
            len: 3,
        };
        assert!(err.is_out_of_bounds());
        assert_eq!(err.to_string(), "column -1 is out of bounds for length 3");
    }

    #[test]
    fn invalid_coordinate_is_not_a_bounds_error() {
        let err = GridError::InvalidCoordinate {
            axis: Axis::Row,
            reason: "offset overflows i32",
        };
        assert!(!err.is_out_of_bounds());
        assert_eq!(err.to_string(), "invalid row coordinate: offset overflows i32");
    }
}
