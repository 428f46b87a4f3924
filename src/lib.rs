mod defaults;
pub mod distance_measure;
mod error;
pub mod interface;
mod meanshift_base;
mod parallel;
#[cfg(feature = "python")]
mod python_binding;
mod reader;
#[cfg(test)]
mod test_utils;
mod utils;

pub use distance_measure::{squared_distance, DistanceMeasure, SquaredEuclidean};
pub use error::{MeanShiftError, Result};
pub use interface::{MeanShiftInterface, MeanShiftResult, Parameters, Reduction};
pub use defaults::{neighbors, par_neighbors, par_shift, shift};
pub use meanshift_base::{
    gaussian_weight, neighbors as neighbors_with, shift as shift_with, MeanShift, Trajectory,
};
pub use parallel::{par_neighbors as par_neighbors_with, par_shift as par_shift_with};
pub use reader::{grid_from_path, grid_from_reader, DEFAULT_DIMENSIONS};
pub use utils::{extent, Extent, LibData};
