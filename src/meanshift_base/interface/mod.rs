#[cfg(test)]
mod tests;

use crate::distance_measure::DistanceMeasure;
use crate::interface::{MeanShiftInterface, MeanShiftResult, Parameters};
use crate::meanshift_base::MeanShift;
use crate::utils::LibData;
use anyhow::{Context, Result};
use ndarray::ArrayView2;

impl<A: LibData, D: DistanceMeasure<A>> MeanShiftInterface<A> for MeanShift<A, D> {
    fn init(parameters: Parameters<A>) -> Result<Self> {
        parameters.validate()?;
        MeanShift::new(parameters).context("Could not set up mean shift")
    }

    fn fit(&self, queries: ArrayView2<A>, grid: ArrayView2<A>) -> Result<MeanShiftResult<A>> {
        let rounds = self.parameters.rounds;
        self.run_with_trajectories(queries, grid, rounds)
            .with_context(|| format!("Mean shift over {} rounds failed", rounds))
    }
}
