use crate::error::{MeanShiftError, Result};
use crate::utils::LibData;
use std::str::FromStr;

const AREA_RADIUS: f64 = 1.0;
const KERNEL_BANDWIDTH: f64 = 0.6;
const ROUNDS: usize = 20;
const N_THREADS: usize = 4;

/// How the neighbor scan and the weighted sum of a shift are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    Sequential,
    Parallel,
}

impl Default for Reduction {
    fn default() -> Self {
        Reduction::Sequential
    }
}

impl FromStr for Reduction {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameters<A: LibData> {
    /// Neighbors farther than this from the shifted point are ignored.
    pub area_radius: A,
    /// Spread of the gaussian kernel.
    pub kernel_bandwidth: A,
    pub rounds: usize,
    /// Worker count of the pool used by `Reduction::Parallel`.
    pub n_threads: usize,
    pub reduction: Reduction,
}

impl<A: LibData> Parameters<A> {
    pub fn new(area_radius: A, kernel_bandwidth: A) -> Result<Self> {
        let parameters = Self {
            area_radius,
            kernel_bandwidth,
            ..Default::default()
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_threads(mut self, n_threads: usize) -> Self {
        self.n_threads = n_threads;
        self
    }

    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = reduction;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.area_radius) {
            return Err(MeanShiftError::InvalidRadius);
        }
        validate_bandwidth(self.kernel_bandwidth)
    }
}

impl<A: LibData> Default for Parameters<A> {
    fn default() -> Self {
        Self {
            area_radius: A::from_f64(AREA_RADIUS).unwrap_or_else(A::one),
            kernel_bandwidth: A::from_f64(KERNEL_BANDWIDTH).unwrap_or_else(A::one),
            rounds: ROUNDS,
            n_threads: N_THREADS,
            reduction: Reduction::default(),
        }
    }
}

pub(crate) fn validate_bandwidth<A: LibData>(bandwidth: A) -> Result<()> {
    if is_positive(bandwidth) {
        Ok(())
    } else {
        Err(MeanShiftError::InvalidBandwidth)
    }
}

fn is_positive<A: LibData>(value: A) -> bool {
    value.is_finite() && value > A::zero()
}
