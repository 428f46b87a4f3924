//! Neighborhood query and shift with the distance fixed to [`SquaredEuclidean`].
//!
//! The `*_with` variants at the crate root take the distance as a type parameter.

use crate::distance_measure::SquaredEuclidean;
use crate::error::Result;
use crate::interface::Parameters;
use crate::utils::LibData;
use crate::{meanshift_base, parallel};
use ndarray::{Array1, ArrayView1, ArrayView2};

pub fn neighbors<'a, A: LibData>(
    center: ArrayView1<A>,
    points: ArrayView2<'a, A>,
    radius: A,
) -> Result<Vec<ArrayView1<'a, A>>> {
    meanshift_base::neighbors::<A, SquaredEuclidean>(center, points, radius)
}

pub fn shift<A: LibData>(
    x: ArrayView1<A>,
    points: ArrayView2<A>,
    parameters: &Parameters<A>,
) -> Result<Array1<A>> {
    meanshift_base::shift::<A, SquaredEuclidean>(x, points, parameters)
}

pub fn par_neighbors<'a, A: LibData>(
    center: ArrayView1<A>,
    points: ArrayView2<'a, A>,
    radius: A,
) -> Result<Vec<ArrayView1<'a, A>>> {
    parallel::par_neighbors::<A, SquaredEuclidean>(center, points, radius)
}

pub fn par_shift<A: LibData>(
    x: ArrayView1<A>,
    points: ArrayView2<A>,
    parameters: &Parameters<A>,
) -> Result<Array1<A>> {
    parallel::par_shift::<A, SquaredEuclidean>(x, points, parameters)
}
