mod bulk;
pub mod grid2d;
pub mod walker;

pub use grid2d::Grid2d;
pub use walker::{GridWalker, GridWalkerMut, Walker};
