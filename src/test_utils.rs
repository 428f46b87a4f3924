use crate::interface::Parameters;
use crate::reader::{grid_from_path, DEFAULT_DIMENSIONS};
use ndarray::Array2;
use std::fmt::Debug;

pub fn read_data(file_path: &str) -> (Parameters<f64>, Array2<f64>) {
    grid_from_path(DEFAULT_DIMENSIONS, file_path).expect("Could not read test dataset")
}

pub fn close_l1<A: num_traits::Float + Debug>(expected: A, received: A, tolerance: A) {
    assert!(
        (expected - received).abs() < tolerance,
        "expected {:?}, received {:?}",
        expected,
        received
    );
}
