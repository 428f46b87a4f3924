use crate::interface::Parameters;
use crate::utils::LibData;
use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use ndarray::Array2;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_DIMENSIONS: usize = 2;

/// Reads the bandwidths and the grid from a delimited stream.
///
/// Tokens are separated by commas, whitespace or line breaks. The first token is the area
/// radius, the second the kernel bandwidth, and every following group of `dimensions`
/// tokens is one point of the grid.
pub fn grid_from_reader<A: LibData, R: Read>(
    dimensions: usize,
    stream: R,
) -> Result<(Parameters<A>, Array2<A>)> {
    if dimensions == 0 {
        bail!("Points need at least one dimension");
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(stream);

    let mut tokens: Vec<A> = vec![];
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Could not read record {}", line + 1))?;
        for field in record.iter() {
            for token in field.split_whitespace() {
                let value = token.parse::<A>().map_err(|_| {
                    anyhow!("Token '{}' in record {} is not a number", token, line + 1)
                })?;
                tokens.push(value);
            }
        }
    }

    if tokens.len() < 2 {
        bail!("Stream must start with the area radius and the kernel bandwidth");
    }
    let values = tokens.split_off(2);
    let parameters = Parameters::new(tokens[0], tokens[1])
        .context("Stream header holds invalid bandwidths")?;

    if values.len() % dimensions != 0 {
        bail!(
            "{} values cannot be grouped into points of {} dimensions",
            values.len(),
            dimensions
        );
    }
    let n_points = values.len() / dimensions;
    let grid = Array2::from_shape_vec((n_points, dimensions), values)?;

    debug!(
        "read {} points, area radius {}, kernel bandwidth {}",
        n_points, parameters.area_radius, parameters.kernel_bandwidth
    );
    Ok((parameters, grid))
}

pub fn grid_from_path<A: LibData, P: AsRef<Path>>(
    dimensions: usize,
    path: P,
) -> Result<(Parameters<A>, Array2<A>)> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    grid_from_reader(dimensions, file).with_context(|| format!("Could not parse {}", path.display()))
}
