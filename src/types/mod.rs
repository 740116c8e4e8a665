pub mod coords;
pub mod error;
pub mod shape;

pub use coords::{cell_from_indices, offset};
pub use error::{Axis, GridError};
pub use shape::GridShape;
