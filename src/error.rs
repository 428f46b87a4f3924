use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeanShiftError {
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Kernel bandwidth must be strictly positive")]
    InvalidBandwidth,

    #[error("Area radius must be strictly positive")]
    InvalidRadius,

    #[error("Cannot summarize an empty point set")]
    EmptyInput,

    #[error("Lattice with {divisions} divisions over {dimensions} dimensions does not fit in memory")]
    LatticeTooLarge { divisions: usize, dimensions: usize },

    #[error("Could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, MeanShiftError>;

pub(crate) fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(MeanShiftError::DimensionMismatch { expected, actual })
    }
}
