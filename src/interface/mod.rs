pub use crate::interface::parameters::{Parameters, Reduction};
use crate::meanshift_base::Trajectory;
use crate::utils::LibData;
use anyhow::Result;
use ndarray::{Array2, ArrayView2};

pub(crate) mod parameters;

pub trait MeanShiftInterface<A: LibData>: Sized {
    fn init(parameters: Parameters<A>) -> Result<Self>;
    fn fit(&self, queries: ArrayView2<A>, grid: ArrayView2<A>) -> Result<MeanShiftResult<A>>;
}

/// Final query positions and the path each of them took.
pub type MeanShiftResult<A> = (Array2<A>, Vec<Trajectory<A>>);
