use crate::error::{MeanShiftError, Result};
use ndarray::{Array1, Array2, ArrayView2, Axis, ScalarOperand, Zip};
use num_traits::{Float, FromPrimitive};
use std::convert::TryFrom;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::str::FromStr;

pub trait LibData:
    'static
    + Unpin
    + Clone
    + Send
    + Default
    + Sync
    + Debug
    + Float
    + FromPrimitive
    + Sum
    + FromStr
    + ScalarOperand
    + Display
{
}

impl LibData for f32 {}

impl LibData for f64 {}

/// Per-dimension bounding box of a point set.
#[derive(Clone, Debug, PartialEq)]
pub struct Extent<A: LibData> {
    pub mins: Array1<A>,
    pub maxs: Array1<A>,
}

/// Scans `points` once and records the smallest and largest value of every column.
pub fn extent<A: LibData>(points: ArrayView2<A>) -> Result<Extent<A>> {
    let mut rows = points.axis_iter(Axis(0));
    let first = rows.next().ok_or(MeanShiftError::EmptyInput)?;

    let mut mins = first.to_owned();
    let mut maxs = first.to_owned();
    for row in rows {
        Zip::from(&mut mins)
            .and(&mut maxs)
            .and(&row)
            .for_each(|min, max, &value| {
                if value < *min {
                    *min = value;
                }
                if value > *max {
                    *max = value;
                }
            });
    }

    Ok(Extent { mins, maxs })
}

impl<A: LibData> Extent<A> {
    pub fn dimensions(&self) -> usize {
        self.mins.len()
    }

    /// Evenly spaced query points covering the extent, `divisions` per axis.
    ///
    /// Axis `d` takes the values `mins[d] + i * (maxs[d] - mins[d]) / divisions` for
    /// `i` in `0..divisions`, so the upper bound itself is never part of the lattice.
    /// Rows are ordered with the last axis varying fastest.
    pub fn lattice(&self, divisions: usize) -> Result<Array2<A>> {
        let dimensions = self.dimensions();
        let too_large = MeanShiftError::LatticeTooLarge {
            divisions,
            dimensions,
        };
        let n_points = u32::try_from(dimensions)
            .ok()
            .and_then(|exponent| divisions.checked_pow(exponent))
            .ok_or(too_large)?;

        if n_points == 0 {
            return Ok(Array2::zeros((0, dimensions)));
        }

        let count = A::from_usize(divisions).ok_or(MeanShiftError::LatticeTooLarge {
            divisions,
            dimensions,
        })?;
        let steps: Array1<A> = (&self.maxs - &self.mins).mapv_into(|span| span / count);

        // place value of each axis when a row index is read as a base-`divisions` number
        let mut strides = vec![1usize; dimensions];
        for d in (0..dimensions.saturating_sub(1)).rev() {
            strides[d] = strides[d + 1] * divisions;
        }

        Ok(Array2::from_shape_fn((n_points, dimensions), |(row, d)| {
            let digit = (row / strides[d]) % divisions;
            let offset = A::from_usize(digit).unwrap_or_else(A::zero);
            self.mins[d] + offset * steps[d]
        }))
    }
}
