//! Stellarium constellation figures
//!
//! `constellationship.fab` lists one figure per line:
//! `ABBR N hip1 hip2 hip3 hip4 ...`, where consecutive HIP numbers are the two
//! ends of a line segment and `N` is the number of segments.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::SkywatchError;

/// Stick figure of one constellation as HIP-number line segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationFigure {
    pub abbreviation: String,
    pub segments: Vec<(u32, u32)>,
}

/// Parse figures, one per non-blank line
pub fn load_figures<R: Read>(reader: R) -> Result<Vec<ConstellationFigure>> {
    let mut figures = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(abbreviation) = parts.next() else {
            continue;
        };

        let malformed = |what: &str| {
            SkywatchError::DataError(format!("line {}: {} in figure {}", index + 1, what, abbreviation))
        };

        // Segment count; the pairs themselves are authoritative
        parts
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| malformed("missing segment count"))?;

        let stars = parts
            .map(|s| s.parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| malformed("invalid HIP number"))?;

        if stars.len() % 2 != 0 {
            return Err(malformed("odd number of HIP numbers"));
        }

        figures.push(ConstellationFigure {
            abbreviation: abbreviation.to_string(),
            segments: stars.chunks(2).map(|pair| (pair[0], pair[1])).collect(),
        });
    }

    Ok(figures)
}

/// Parse figures from a file on disk
pub fn load_figures_file<P: AsRef<Path>>(path: P) -> Result<Vec<ConstellationFigure>> {
    load_figures(File::open(path)?)
}
