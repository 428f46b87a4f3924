mod helper_functions;
mod interface;

pub use crate::meanshift_base::helper_functions::{gaussian_weight, neighbors, shift};
pub(crate) use crate::meanshift_base::helper_functions::{
    accumulate, empty_accumulator, finish, radius_threshold,
};

use crate::distance_measure::{DistanceMeasure, SquaredEuclidean};
use crate::error::{check_dimension, Result};
use crate::interface::{Parameters, Reduction};
use crate::parallel::par_shift;
use crate::utils::LibData;
use log::*;
use ndarray::parallel::prelude::*;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::marker::PhantomData;

/// Positions of one query point after each round, oldest first.
pub type Trajectory<A> = Vec<Array1<A>>;

/// Moves query points uphill on the kernel density of a fixed point set (the grid).
///
/// The grid is only ever borrowed, so one `MeanShift` can be run against several grids.
/// With `Reduction::Parallel` every shift runs on a private pool of
/// `parameters.n_threads` workers.
pub struct MeanShift<A: LibData, D: DistanceMeasure<A> = SquaredEuclidean> {
    pub parameters: Parameters<A>,
    pool: Option<ThreadPool>,
    distance_measure: PhantomData<D>,
}

impl<A: LibData, D: DistanceMeasure<A>> MeanShift<A, D> {
    pub fn new(parameters: Parameters<A>) -> Result<Self> {
        let pool = match parameters.reduction {
            Reduction::Sequential => None,
            Reduction::Parallel => Some(
                ThreadPoolBuilder::new()
                    .num_threads(parameters.n_threads)
                    .build()?,
            ),
        };
        debug!(
            "mean shift with {:?} reduction, area radius {}, kernel bandwidth {}, distance {}",
            parameters.reduction,
            parameters.area_radius,
            parameters.kernel_bandwidth,
            D::NAME
        );

        Ok(Self {
            parameters,
            pool,
            distance_measure: PhantomData::default(),
        })
    }

    pub fn shift(&self, x: ArrayView1<A>, grid: ArrayView2<A>) -> Result<Array1<A>> {
        match &self.pool {
            None => shift::<A, D>(x, grid, &self.parameters),
            Some(pool) => pool.install(|| par_shift::<A, D>(x, grid, &self.parameters)),
        }
    }

    /// Shifts every row of `queries` once. All rows are shifted from the same snapshot.
    fn round(&self, queries: ArrayView2<A>, grid: ArrayView2<A>) -> Result<Array2<A>> {
        let shifted: Vec<Array1<A>> = match &self.pool {
            None => queries
                .axis_iter(Axis(0))
                .map(|query| shift::<A, D>(query, grid, &self.parameters))
                .collect::<Result<_>>()?,
            Some(pool) => pool.install(|| {
                queries
                    .axis_iter(Axis(0))
                    .into_par_iter()
                    .map(|query| par_shift::<A, D>(query, grid, &self.parameters))
                    .collect::<Result<_>>()
            })?,
        };

        let mut next = Array2::zeros(queries.raw_dim());
        for (mut row, point) in next.axis_iter_mut(Axis(0)).zip(shifted.iter()) {
            row.assign(point);
        }
        Ok(next)
    }

    /// Applies `rounds` synchronous rounds of shifts to `queries`.
    pub fn run(&self, queries: ArrayView2<A>, grid: ArrayView2<A>, rounds: usize) -> Result<Array2<A>> {
        check_dimension(grid.ncols(), queries.ncols())?;

        let mut current = queries.to_owned();
        for round in 0..rounds {
            current = self.round(current.view(), grid)?;
            debug!("round {}/{} shifted {} points", round + 1, rounds, current.nrows());
        }
        Ok(current)
    }

    /// Like [`MeanShift::run`], also recording where every query point was after each round.
    pub fn run_with_trajectories(
        &self,
        queries: ArrayView2<A>,
        grid: ArrayView2<A>,
        rounds: usize,
    ) -> Result<(Array2<A>, Vec<Trajectory<A>>)> {
        check_dimension(grid.ncols(), queries.ncols())?;

        let mut trajectories: Vec<Trajectory<A>> = (0..queries.nrows())
            .map(|_| Vec::with_capacity(rounds))
            .collect();
        let mut current = queries.to_owned();
        for round in 0..rounds {
            current = self.round(current.view(), grid)?;
            for (trajectory, point) in trajectories.iter_mut().zip(current.axis_iter(Axis(0))) {
                trajectory.push(point.to_owned());
            }
            debug!("round {}/{} shifted {} points", round + 1, rounds, current.nrows());
        }
        Ok((current, trajectories))
    }

    /// Shifts `x` until it moves less than `stop_threshold` (in squared distance) within
    /// one round, or `max_rounds` rounds have passed. Returns the point and the rounds used.
    pub fn converge(
        &self,
        x: ArrayView1<A>,
        grid: ArrayView2<A>,
        max_rounds: usize,
        stop_threshold: A,
    ) -> Result<(Array1<A>, usize)> {
        check_dimension(grid.ncols(), x.len())?;

        let mut current = x.to_owned();
        for round in 0..max_rounds {
            let next = self.shift(current.view(), grid)?;
            let movement = D::distance(next.view(), current.view());
            current = next;
            if movement < stop_threshold {
                debug!("converged after {} rounds", round + 1);
                return Ok((current, round + 1));
            }
        }
        Ok((current, max_rounds))
    }
}
