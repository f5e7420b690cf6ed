//! Hipparcos star catalog
//!
//! Reads the pipe-separated `hip_main.dat` (CDS I/239) into [`Star`] values
//! keyed by HIP identifier.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use super::StarCatalog;
use crate::celestial::Star;
use crate::coordinates::angle::{parse_sexagesimal, AngleKind};
use crate::Result;
use crate::SkywatchError;

// Field positions in hip_main.dat
const FIELD_HIP: usize = 1;
const FIELD_RA_HMS: usize = 3;
const FIELD_DEC_DMS: usize = 4;
const FIELD_VMAG: usize = 5;
const FIELD_PARALLAX: usize = 11;
const FIELD_PM_RA: usize = 12;
const FIELD_PM_DEC: usize = 13;

/// Hipparcos catalog
#[derive(Debug, Clone)]
pub struct HipparcosCatalog {
    /// Stars by HIP identifier string
    stars: HashMap<String, Star>,
    /// Magnitude limit used when loading
    mag_limit: f64,
}

impl HipparcosCatalog {
    /// Create a new empty Hipparcos catalog
    pub fn new() -> Self {
        Self {
            stars: HashMap::new(),
            mag_limit: f64::MAX,
        }
    }

    /// Load from the Hipparcos .dat file
    pub fn from_dat_file<P: AsRef<Path>>(path: P, mag_limit: f64) -> Result<Self> {
        let file = File::open(&path)?;

        if file.metadata()?.len() == 0 {
            return Err(SkywatchError::DataError(
                "Hipparcos data file is empty".to_string(),
            ));
        }

        Self::from_reader(file, mag_limit)
    }

    /// Parse catalog rows, keeping stars no fainter than `mag_limit`
    ///
    /// Missing optional numbers (magnitude, parallax, proper motion) read as
    /// zero. Rows whose identifier or position cannot be read are skipped.
    pub fn from_reader<R: Read>(reader: R, mag_limit: f64) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut catalog = Self {
            stars: HashMap::new(),
            mag_limit,
        };

        let mut line_count = 0;
        let mut skipped_lines = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            line_count += 1;

            if line.trim().is_empty() {
                continue;
            }

            match parse_row(&line) {
                Some((id, star)) => {
                    if star.magnitude <= mag_limit {
                        catalog.stars.insert(id, star);
                    }
                }
                None => {
                    warn!("skipping malformed Hipparcos row {}", index + 1);
                    skipped_lines += 1;
                }
            }
        }

        if catalog.stars.is_empty() && line_count > 0 && skipped_lines == line_count {
            return Err(SkywatchError::DataError(format!(
                "No stars loaded: all {} lines were malformed",
                line_count
            )));
        }

        debug!(
            "Loaded {} stars from Hipparcos catalog (read {} lines, skipped {})",
            catalog.stars.len(),
            line_count,
            skipped_lines
        );
        Ok(catalog)
    }

    /// Look up a star by its HIP identifier string
    pub fn get(&self, id: &str) -> Option<&Star> {
        self.stars.get(id.trim())
    }

    /// Look up a star by HIP number
    pub fn from_hip(&self, number: u32) -> Result<&Star> {
        self.stars
            .get(&number.to_string())
            .ok_or_else(|| SkywatchError::ObjectNotFound(format!("HIP {}", number)))
    }

    /// Add or replace a star
    pub fn insert(&mut self, id: impl Into<String>, star: Star) {
        self.stars.insert(id.into(), star);
    }

    /// Get the magnitude limit used when loading this catalog
    pub fn mag_limit(&self) -> f64 {
        self.mag_limit
    }
}

impl Default for HipparcosCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StarCatalog for HipparcosCatalog {
    fn get_star(&self, id: &str) -> Option<&Star> {
        self.get(id)
    }

    fn stars(&self) -> impl Iterator<Item = (&str, &Star)> {
        self.stars.iter().map(|(id, star)| (id.as_str(), star))
    }

    fn len(&self) -> usize {
        self.stars.len()
    }
}

fn parse_number(field: Option<&&str>) -> f64 {
    field.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

fn parse_row(line: &str) -> Option<(String, Star)> {
    let fields: Vec<&str> = line.split('|').collect();

    let id = fields.get(FIELD_HIP)?.trim();
    if id.is_empty() {
        return None;
    }

    let ra = parse_sexagesimal(AngleKind::Hours, fields.get(FIELD_RA_HMS)?)?;
    let dec = parse_sexagesimal(AngleKind::Degrees, fields.get(FIELD_DEC_DMS)?)?;

    let star = Star::from_angles(ra, dec)
        .ok()?
        .with_magnitude(parse_number(fields.get(FIELD_VMAG)))
        .with_parallax(parse_number(fields.get(FIELD_PARALLAX)))
        .with_proper_motion(
            parse_number(fields.get(FIELD_PM_RA)),
            parse_number(fields.get(FIELD_PM_DEC)),
        );

    Some((id.to_string(), star))
}
