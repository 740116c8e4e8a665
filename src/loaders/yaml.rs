use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::grid::Grid2d;
use crate::types::{GridError, GridShape, cell_from_indices};

/// On-disk grid description. `rows` and `columns` default to the extent of
/// `cells`; null entries leave their cell empty.
#[derive(Debug, Deserialize)]
struct GridDocument<T> {
    rows: Option<u32>,
    columns: Option<u32>,
    #[serde(default = "Vec::new")]
    cells: Vec<Vec<Option<T>>>,
}

impl<T> GridDocument<T> {
    fn shape(&self) -> Result<GridShape, GridError> {
        let listed = GridShape::from_row_lengths(self.cells.iter().map(Vec::len))?;
        Ok(GridShape {
            rows: self.rows.unwrap_or(listed.rows),
            columns: self.columns.unwrap_or(listed.columns),
        })
    }
}

/// Parse a grid from a YAML document.
///
/// Listed cells are loaded row-major; one that falls outside the declared
/// shape fails the whole load with the same error [`Grid2d::set`] would give.
pub fn grid_from_yaml_str<T: DeserializeOwned>(yaml: &str) -> Result<Grid2d<T>, GridError> {
    let document: GridDocument<T> = serde_yaml::from_str(yaml)?;
    let shape = document.shape()?;
    log::debug!(
        "loading {}x{} grid from {} listed rows",
        shape.rows,
        shape.columns,
        document.cells.len()
    );

    let mut grid = Grid2d::new(shape.rows, shape.columns);
    for (x, row) in document.cells.into_iter().enumerate() {
        for (y, value) in row.into_iter().enumerate() {
            if let Some(value) = value {
                grid.set(cell_from_indices(x, y)?, value)?;
            }
        }
    }

    Ok(grid)
}

/// Read and parse a YAML grid file.
pub fn load_grid<T: DeserializeOwned>(yaml_path: impl AsRef<Path>) -> Result<Grid2d<T>, GridError> {
    let yaml_path = yaml_path.as_ref();
    log::debug!("reading grid from {}", yaml_path.display());
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    grid_from_yaml_str(&yaml_str)
}
