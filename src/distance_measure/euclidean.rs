use crate::distance_measure::DistanceMeasure;
use crate::utils::LibData;
use ndarray::{ArrayView1, Zip};

#[derive(Copy, Clone, Default, Debug)]
pub struct SquaredEuclidean;

impl<A: LibData> DistanceMeasure<A> for SquaredEuclidean {
    const NAME: &'static str = "squared_euclidean";

    fn distance(point_a: ArrayView1<A>, point_b: ArrayView1<A>) -> A {
        Zip::from(&point_a)
            .and(&point_b)
            .fold(A::zero(), |distance, &a, &b| {
                let diff = a - b;
                distance + diff * diff
            })
    }
}
