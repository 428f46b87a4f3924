use crate::interface::{MeanShiftInterface, Parameters, Reduction};
use crate::MeanShift;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type LibDataType = f64;

#[pyfunction]
fn mean_shift<'py>(
    py: Python<'py>,
    queries: PyReadonlyArray2<'py, LibDataType>,
    grid: PyReadonlyArray2<'py, LibDataType>,
    area_radius: LibDataType,
    kernel_bandwidth: LibDataType,
    rounds: usize,
    n_threads: usize,
    reduction: String,
) -> PyResult<&'py PyArray2<LibDataType>> {
    let reduction: Reduction = reduction
        .parse()
        .map_err(|_| PyValueError::new_err(format!("Reduction {} not known.", reduction)))?;
    let parameters = Parameters::new(area_radius, kernel_bandwidth)
        .map_err(|e| PyValueError::new_err(e.to_string()))?
        .with_rounds(rounds)
        .with_threads(n_threads)
        .with_reduction(reduction);

    let queries = queries.as_array();
    let grid = grid.as_array();
    let (shifted, _) = py
        .allow_threads(|| {
            let model: MeanShift<LibDataType> = MeanShiftInterface::init(parameters)?;
            model.fit(queries, grid)
        })
        .map_err(|e| PyValueError::new_err(format!("{:#}", e)))?;

    Ok(shifted.into_pyarray(py))
}

#[pymodule]
fn meanshift_grid(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mean_shift, m)?)?;

    Ok(())
}
