use crate::distance_measure::DistanceMeasure;
use crate::error::{check_dimension, Result};
use crate::interface::parameters::validate_bandwidth;
use crate::interface::Parameters;
use crate::utils::LibData;
use log::trace;
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// Running `(numerator, denominator)` of the weighted mean.
pub(crate) type Accumulator<A> = (Array1<A>, A);

/// Squared cutoff of the ball test. A non-positive radius only admits exact coincidences.
pub(crate) fn radius_threshold<A: LibData>(radius: A) -> A {
    if radius > A::zero() {
        radius * radius
    } else {
        A::zero()
    }
}

/// All rows of `points` within `radius` of `center`, in the order they appear in `points`.
pub fn neighbors<'a, A: LibData, D: DistanceMeasure<A>>(
    center: ArrayView1<A>,
    points: ArrayView2<'a, A>,
    radius: A,
) -> Result<Vec<ArrayView1<'a, A>>> {
    check_dimension(points.ncols(), center.len())?;
    let threshold = radius_threshold(radius);

    Ok((0..points.nrows())
        .map(|i| points.index_axis_move(Axis(0), i))
        .filter(|point| D::distance(center, point.view()) <= threshold)
        .collect())
}

/// Gaussian weight of a neighbor at `squared_distance`.
///
/// The exponent is positive, so within the area radius the weight grows with distance.
/// Regression values computed by this crate depend on that sign.
pub fn gaussian_weight<A: LibData>(squared_distance: A, bandwidth: A) -> A {
    let two = A::one() + A::one();
    (squared_distance / (two * (bandwidth * bandwidth))).exp()
}

pub(crate) fn empty_accumulator<A: LibData>(dimensions: usize) -> Accumulator<A> {
    (Array1::zeros(dimensions), A::zero())
}

/// Adds one neighbor's weighted contribution to the running sums.
pub(crate) fn accumulate<A: LibData, D: DistanceMeasure<A>>(
    x: ArrayView1<A>,
    x_i: ArrayView1<A>,
    bandwidth: A,
    (mut numerator, denominator): Accumulator<A>,
) -> Accumulator<A> {
    let weight = gaussian_weight(D::distance(x, x_i), bandwidth);
    numerator.scaled_add(weight, &x_i);
    (numerator, denominator + weight)
}

/// Turns the sums into the shifted point. No neighbors at all yields the origin.
pub(crate) fn finish<A: LibData>(
    (numerator, denominator): Accumulator<A>,
    neighbor_count: usize,
) -> Array1<A> {
    if neighbor_count == 0 {
        return numerator;
    }
    numerator.mapv_into(|sum| sum / denominator)
}

/// One mean shift step of `x` towards the weighted mean of its neighborhood in `points`.
pub fn shift<A: LibData, D: DistanceMeasure<A>>(
    x: ArrayView1<A>,
    points: ArrayView2<A>,
    parameters: &Parameters<A>,
) -> Result<Array1<A>> {
    validate_bandwidth(parameters.kernel_bandwidth)?;
    let neighbors = neighbors::<A, D>(x, points, parameters.area_radius)?;
    trace!("{} neighbors within {}", neighbors.len(), parameters.area_radius);

    let sums = neighbors
        .iter()
        .fold(empty_accumulator(x.len()), |sums, x_i| {
            accumulate::<A, D>(x, x_i.view(), parameters.kernel_bandwidth, sums)
        });

    Ok(finish(sums, neighbors.len()))
}
