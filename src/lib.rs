pub mod grid;
pub mod loaders;
pub mod types;

pub use grid::{Grid2d, GridWalker, GridWalkerMut, Walker};
pub use loaders::yaml::{grid_from_yaml_str, load_grid};
pub use types::{Axis, GridError, GridShape};
