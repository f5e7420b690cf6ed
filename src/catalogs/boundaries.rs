//! Constellation boundary file reader
//!
//! Each line of `bound_20.dat` (CDS VI/49) holds one vertex:
//! `RA-hours Dec-degrees CODE`. Vertices of one constellation are listed in
//! polygon order.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::constellations::BoundaryTable;
use crate::Result;
use crate::SkywatchError;

/// Parse a boundary file into a table, keeping file order
pub fn load_boundaries<R: Read>(reader: R) -> Result<BoundaryTable> {
    let mut table = BoundaryTable::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let malformed =
            || SkywatchError::DataError(format!("line {}: malformed boundary row {:?}", index + 1, line));

        let mut parts = line.split_whitespace();
        let ra = parts
            .next()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(malformed)?;
        let dec = parts
            .next()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(malformed)?;
        let code = parts.next().ok_or_else(malformed)?;

        table.push_vertex(&code.to_ascii_uppercase(), ra, dec);
    }

    debug!("Loaded boundaries for {} constellations", table.len());
    Ok(table)
}

/// Parse a boundary file from disk
pub fn load_boundaries_file<P: AsRef<Path>>(path: P) -> Result<BoundaryTable> {
    load_boundaries(File::open(path)?)
}
