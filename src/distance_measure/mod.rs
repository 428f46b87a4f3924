use crate::error::{check_dimension, Result};
use crate::utils::LibData;
use ndarray::ArrayView1;

pub mod euclidean;

pub use euclidean::SquaredEuclidean;

/// Metric used for the neighborhood ball test and the kernel weights.
///
/// `distance` assumes both points have the same length; callers check that first.
pub trait DistanceMeasure<A: LibData>
where
    Self: Default + Copy + Clone + Send + Sync,
{
    const NAME: &'static str;

    fn distance(point_a: ArrayView1<A>, point_b: ArrayView1<A>) -> A;
}

/// Squared euclidean distance, failing if the points differ in dimension.
pub fn squared_distance<A: LibData>(point_a: ArrayView1<A>, point_b: ArrayView1<A>) -> Result<A> {
    check_dimension(point_a.len(), point_b.len())?;
    Ok(SquaredEuclidean::distance(point_a, point_b))
}
