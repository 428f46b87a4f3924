#[cfg(test)]
mod tests;

use crate::distance_measure::DistanceMeasure;
use crate::error::{check_dimension, Result};
use crate::interface::parameters::validate_bandwidth;
use crate::interface::Parameters;
use crate::meanshift_base::{accumulate, empty_accumulator, finish, radius_threshold};
use crate::utils::LibData;
use log::trace;
use ndarray::parallel::prelude::*;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Same contract as [`crate::neighbors`], scanning `points` on the current rayon pool.
pub fn par_neighbors<'a, A: LibData, D: DistanceMeasure<A>>(
    center: ArrayView1<A>,
    points: ArrayView2<'a, A>,
    radius: A,
) -> Result<Vec<ArrayView1<'a, A>>> {
    check_dimension(points.ncols(), center.len())?;
    let threshold = radius_threshold(radius);

    Ok((0..points.nrows())
        .into_par_iter()
        .map(|i| points.index_axis_move(Axis(0), i))
        .filter(|point| D::distance(center, point.view()) <= threshold)
        .collect())
}

/// Same contract as [`crate::shift`]. Every worker folds its share of the neighborhood
/// into a private `(numerator, denominator)` pair and the pairs are summed afterwards.
pub fn par_shift<A: LibData, D: DistanceMeasure<A>>(
    x: ArrayView1<A>,
    points: ArrayView2<A>,
    parameters: &Parameters<A>,
) -> Result<Array1<A>> {
    validate_bandwidth(parameters.kernel_bandwidth)?;
    let neighbors = par_neighbors::<A, D>(x, points, parameters.area_radius)?;
    trace!("{} neighbors within {}", neighbors.len(), parameters.area_radius);

    let dimensions = x.len();
    let bandwidth = parameters.kernel_bandwidth;
    let sums = neighbors
        .par_iter()
        .fold(
            || empty_accumulator(dimensions),
            |sums, x_i| accumulate::<A, D>(x, x_i.view(), bandwidth, sums),
        )
        .reduce(
            || empty_accumulator(dimensions),
            |(numerator_a, denominator_a), (numerator_b, denominator_b)| {
                (numerator_a + numerator_b, denominator_a + denominator_b)
            },
        );

    Ok(finish(sums, neighbors.len()))
}
