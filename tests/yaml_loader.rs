use std::path::Path;

use cellgrid::{Grid2d, GridError, GridShape, load_grid};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_labelled_grid() {
    let grid: Grid2d<String> = load_grid(fixture("labels.yaml")).expect("grid should load");

    assert_eq!(grid.shape(), GridShape::new(3, 3));
    for x in 0..3 {
        for y in 0..3 {
            let label = format!("{x},{y}");
            assert_eq!(grid.find((x, y)).unwrap(), Some(&label));
        }
    }
}

#[test]
fn loads_sparse_grid() {
    let grid: Grid2d<u16> = load_grid(fixture("sparse.yaml")).expect("grid should load");

    assert_eq!(grid.shape(), GridShape::new(4, 4));
    let set: Vec<_> = grid
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| cell.map(|v| (idx, v)))
        .collect();
    assert_eq!(set, vec![(0, 1), (2, 3), (11, 16)]);
}

#[test]
fn missing_file_is_io_error() {
    let result: Result<Grid2d<u8>, _> = load_grid(fixture("does_not_exist.yaml"));
    assert!(matches!(result, Err(GridError::Io(_))));
}
