//! Constellation lookup from IAU boundary polygons
//!
//! A position is tested against each boundary polygon with a ray cast toward
//! increasing declination. Right ascension wraps at 0h/24h, so an edge whose
//! RA span exceeds five hours is taken to cross the seam and its RA range test
//! is inverted. A point whose declination falls within the declination span
//! of an edge it lies under is reported as sitting on that polygon's boundary;
//! positions on a shared edge name every polygon they touch.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use crate::celestial::CelestialObject;
use crate::{Result, SkywatchError};

/// RA span (hours) above which an edge is treated as crossing 0h
const SEAM_SPAN_HOURS: f64 = 5.0;

/// Declination (degrees) above which an unmatched position is placed in
/// Ursa Minor
const POLE_CAP_DEC: f64 = 85.0;

lazy_static! {
    static ref FULL_NAMES: HashMap<&'static str, &'static str> = {
        let names: [(&str, &str); 90] = [
            ("AND", "Andromeda"),
            ("ANT", "Antlia"),
            ("APS", "Apus"),
            ("AQR", "Aquarius"),
            ("AQL", "Aquila"),
            ("ARA", "Ara"),
            ("ARI", "Aries"),
            ("AUR", "Auriga"),
            ("BOO", "Bootes"),
            ("CAE", "Caelum"),
            ("CAM", "Camelopardalis"),
            ("CNC", "Cancer"),
            ("CVN", "Canes Venatici"),
            ("CMA", "Canis Major"),
            ("CMI", "Canis Minor"),
            ("CAP", "Capricornus"),
            ("CAR", "Carina"),
            ("CAS", "Cassiopeia"),
            ("CEN", "Centaurus"),
            ("CEP", "Cepheus"),
            ("CET", "Cetus"),
            ("CHA", "Chamaeleon"),
            ("CIR", "Circinus"),
            ("COL", "Columba"),
            ("COM", "Coma Berenices"),
            ("CRA", "Corona Australis"),
            ("CRB", "Corona Borealis"),
            ("CRV", "Corvus"),
            ("CRT", "Crater"),
            ("CRU", "Crux"),
            ("CYG", "Cygnus"),
            ("DEL", "Delphinus"),
            ("DOR", "Dorado"),
            ("DRA", "Draco"),
            ("EQU", "Equuleus"),
            ("ERI", "Eridanus"),
            ("FOR", "Fornax"),
            ("GEM", "Gemini"),
            ("GRU", "Grus"),
            ("HER", "Hercules"),
            ("HOR", "Horologium"),
            ("HYA", "Hydra"),
            ("HYI", "Hydrus"),
            ("IND", "Indus"),
            ("LAC", "Lacerta"),
            ("LEO", "Leo"),
            ("LMI", "Leo Minor"),
            ("LEP", "Lepus"),
            ("LIB", "Libra"),
            ("LUP", "Lupus"),
            ("LYN", "Lynx"),
            ("LYR", "Lyra"),
            ("MEN", "Mensa"),
            ("MIC", "Microscopium"),
            ("MON", "Monoceros"),
            ("MUS", "Musca"),
            ("NOR", "Norma"),
            ("OCT", "Octans"),
            ("OPH", "Ophiuchus"),
            ("ORI", "Orion"),
            ("PAV", "Pavo"),
            ("PEG", "Pegasus"),
            ("PER", "Perseus"),
            ("PHE", "Phoenix"),
            ("PIC", "Pictor"),
            ("PSC", "Pisces"),
            ("PSA", "Piscis Austrinus"),
            ("PUP", "Puppis"),
            ("PYX", "Pyxis"),
            ("RET", "Reticulum"),
            ("SGE", "Sagitta"),
            ("SGR", "Sagittarius"),
            ("SCO", "Scorpius"),
            ("SCL", "Sculptor"),
            ("SCT", "Scutum"),
            ("SER", "Serpens"),
            ("SER1", "Serpens"),
            ("SER2", "Serpens"),
            ("SEX", "Sextans"),
            ("TAU", "Taurus"),
            ("TEL", "Telescopium"),
            ("TRI", "Triangulum"),
            ("TRA", "Triangulum Australe"),
            ("TUC", "Tucana"),
            ("UMA", "Ursa Major"),
            ("UMI", "Ursa Minor"),
            ("VEL", "Vela"),
            ("VIR", "Virgo"),
            ("VOL", "Volans"),
            ("VUL", "Vulpecula"),
        ];
        names.into_iter().collect()
    };
}

/// Full IAU name for a constellation code (case-insensitive)
pub fn full_name(code: &str) -> Option<&'static str> {
    FULL_NAMES.get(code.trim().to_ascii_uppercase().as_str()).copied()
}

/// A (right ascension in hours, declination in degrees) polygon vertex
pub type Vertex = (f64, f64);

/// Boundary polygons keyed by constellation code, in insertion order
///
/// Lookup scans polygons in the order they were added, so the first polygon
/// containing a point wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryTable {
    polygons: Vec<(String, Vec<Vertex>)>,
}

impl BoundaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex to the polygon for `code`, creating the polygon if needed
    pub fn push_vertex(&mut self, code: &str, ra_hours: f64, dec_degrees: f64) {
        match self.polygons.iter_mut().find(|(c, _)| c == code) {
            Some((_, vertices)) => vertices.push((ra_hours, dec_degrees)),
            None => self
                .polygons
                .push((code.to_string(), vec![(ra_hours, dec_degrees)])),
        }
    }

    /// Add a whole polygon, replacing any existing one with the same code
    pub fn insert(&mut self, code: &str, vertices: Vec<Vertex>) {
        match self.polygons.iter_mut().find(|(c, _)| c == code) {
            Some((_, existing)) => *existing = vertices,
            None => self.polygons.push((code.to_string(), vertices)),
        }
    }

    pub fn get(&self, code: &str) -> Option<&[Vertex]> {
        self.polygons
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Vertex])> {
        self.polygons
            .iter()
            .map(|(code, vertices)| (code.as_str(), vertices.as_slice()))
    }

    /// Number of polygons
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl FromIterator<(String, Vec<Vertex>)> for BoundaryTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Vertex>)>>(iter: I) -> Self {
        let mut table = BoundaryTable::new();
        for (code, vertices) in iter {
            table.insert(&code, vertices);
        }
        table
    }
}

/// Where a position falls relative to the boundary polygons, by code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Strictly inside one polygon
    Inside(String),
    /// On the edges of one or more polygons, in table order
    Boundary(Vec<String>),
}

#[derive(Debug, Default)]
struct EdgeScan {
    crossings: usize,
    on_boundary: bool,
}

fn scan_polygon(vertices: &[Vertex], ra: f64, dec: f64) -> EdgeScan {
    let mut scan = EdgeScan::default();
    let n = vertices.len();

    for i in 0..n {
        let (mut l_ra, mut l_dec) = vertices[(i + n - 1) % n];
        let (mut r_ra, mut r_dec) = vertices[i];

        if r_ra < l_ra {
            std::mem::swap(&mut l_ra, &mut r_ra);
            std::mem::swap(&mut l_dec, &mut r_dec);
        }

        let between = l_ra <= ra && ra < r_ra;
        let in_range = if r_ra - l_ra > SEAM_SPAN_HOURS {
            !between
        } else {
            between
        };
        if !in_range {
            continue;
        }

        if dec <= l_dec && dec <= r_dec {
            scan.crossings += 1;
        } else if (l_dec < dec && dec <= r_dec) || (r_dec < dec && dec <= l_dec) {
            scan.on_boundary = true;
        }
    }

    scan
}

/// Place a position among the boundary polygons
///
/// Returns codes as they appear in the table. `None` when nothing matched and
/// the position is not within the north polar cap.
pub fn locate(ra_hours: f64, dec_degrees: f64, table: &BoundaryTable) -> Option<Placement> {
    let mut boundary: Vec<String> = Vec::new();

    for (code, vertices) in table.iter() {
        let scan = scan_polygon(vertices, ra_hours, dec_degrees);

        if scan.on_boundary {
            boundary.push(code.to_string());
            continue;
        }
        if scan.crossings % 2 == 1 {
            return Some(Placement::Inside(code.to_string()));
        }
    }

    if !boundary.is_empty() {
        return Some(Placement::Boundary(boundary));
    }
    if dec_degrees > POLE_CAP_DEC {
        return Some(Placement::Inside("UMI".to_string()));
    }
    None
}

/// Full constellation name for a body
///
/// A position on a shared edge yields the names joined with `+`, for example
/// `"Coma Berenices+Virgo"`.
pub fn find_constellation(body: &impl CelestialObject, table: &BoundaryTable) -> Result<String> {
    let position = body.equatorial();
    let (ra, dec) = (position.ra.to_hours(), position.dec.to_degrees());

    let placement = locate(ra, dec, table).ok_or_else(|| {
        SkywatchError::ObjectNotFound(format!("no constellation contains RA {ra}h Dec {dec}"))
    })?;
    debug!("RA {:.4}h Dec {:.4} placed as {:?}", ra, dec, placement);

    let codes = match placement {
        Placement::Inside(code) => vec![code],
        Placement::Boundary(codes) => codes,
    };

    let names = codes
        .iter()
        .map(|code| {
            full_name(code).ok_or_else(|| {
                SkywatchError::ObjectNotFound(format!("unknown constellation code {code}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(names.join("+"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Equatorial;
    use rstest::{fixture, rstest};

    fn rect(ra0: f64, ra1: f64, dec0: f64, dec1: f64) -> Vec<Vertex> {
        vec![(ra0, dec0), (ra1, dec0), (ra1, dec1), (ra0, dec1)]
    }

    #[fixture]
    fn coma_virgo() -> BoundaryTable {
        let mut table = BoundaryTable::new();
        table.insert("VIR", rect(11.9, 13.6, -5.0, 13.5));
        table.insert("COM", rect(11.9, 13.6, 13.5, 33.0));
        table
    }

    #[fixture]
    fn slanted_shared_edge() -> BoundaryTable {
        let mut table = BoundaryTable::new();
        table.insert("COM", vec![(11.9, 12.0), (13.6, 15.0), (13.6, 33.0), (11.9, 33.0)]);
        table.insert("VIR", vec![(11.9, 0.0), (13.6, 0.0), (13.6, 15.0), (11.9, 12.0)]);
        table
    }

    #[rstest]
    fn test_star_in_coma_berenices(coma_virgo: BoundaryTable) {
        // 12h 37m, +25
        let star = Equatorial::from_hours_degrees(12.0 + 37.0 / 60.0, 25.0);
        assert_eq!(find_constellation(&star, &coma_virgo).unwrap(), "Coma Berenices");
    }

    #[rstest]
    fn test_star_in_virgo(coma_virgo: BoundaryTable) {
        let star = Equatorial::from_hours_degrees(12.5, 2.0);
        assert_eq!(find_constellation(&star, &coma_virgo).unwrap(), "Virgo");
    }

    #[rstest]
    fn test_shared_edge_names_both(slanted_shared_edge: BoundaryTable) {
        let star = Equatorial::from_hours_degrees(12.75, 13.5);
        assert_eq!(
            locate(12.75, 13.5, &slanted_shared_edge),
            Some(Placement::Boundary(vec!["COM".into(), "VIR".into()]))
        );
        assert_eq!(
            find_constellation(&star, &slanted_shared_edge).unwrap(),
            "Coma Berenices+Virgo"
        );
    }

    #[rstest]
    fn test_shared_vertex_is_not_a_boundary(slanted_shared_edge: BoundaryTable) {
        // Edges are half-open in RA, so a shared corner counts for one side only
        assert_eq!(
            locate(11.9, 12.0, &slanted_shared_edge),
            Some(Placement::Inside("VIR".into()))
        );
        assert_eq!(locate(13.6, 15.0, &slanted_shared_edge), None);

        let corner = Equatorial::from_hours_degrees(11.9, 12.0);
        assert_eq!(find_constellation(&corner, &slanted_shared_edge).unwrap(), "Virgo");
    }

    #[rstest]
    fn test_inside_match_replaces_boundary(slanted_shared_edge: BoundaryTable) {
        let mut table = BoundaryTable::new();
        let (code, vertices) = slanted_shared_edge.iter().next().unwrap();
        table.insert(code, vertices.to_vec());
        table.insert("LEO", rect(12.0, 13.0, 10.0, 20.0));

        assert_eq!(locate(12.75, 13.5, &table), Some(Placement::Inside("LEO".into())));
    }

    #[test]
    fn test_seam_crossing_polygon() {
        let mut table = BoundaryTable::new();
        table.insert("PSC", vec![(23.0, 0.0), (1.0, 0.0), (1.0, 10.0), (23.0, 10.0)]);

        assert_eq!(locate(0.5, 5.0, &table), Some(Placement::Inside("PSC".into())));
        assert_eq!(locate(23.5, 5.0, &table), Some(Placement::Inside("PSC".into())));
        assert_eq!(locate(12.0, 5.0, &table), None);
        assert_eq!(locate(0.5, 15.0, &table), None);
    }

    #[rstest]
    fn test_north_pole_fallback(coma_virgo: BoundaryTable) {
        let star = Equatorial::from_hours_degrees(0.0, 89.0);
        assert_eq!(find_constellation(&star, &coma_virgo).unwrap(), "Ursa Minor");
        assert_eq!(
            find_constellation(&star, &BoundaryTable::new()).unwrap(),
            "Ursa Minor"
        );
    }

    #[rstest]
    fn test_no_match_is_not_found(coma_virgo: BoundaryTable) {
        let star = Equatorial::from_hours_degrees(3.0, -40.0);
        assert!(matches!(
            find_constellation(&star, &coma_virgo),
            Err(SkywatchError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn test_unknown_code_is_not_found() {
        let mut table = BoundaryTable::new();
        table.insert("XYZ", rect(1.0, 2.0, 0.0, 10.0));
        let star = Equatorial::from_hours_degrees(1.5, 5.0);
        assert!(matches!(
            find_constellation(&star, &table),
            Err(SkywatchError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn test_full_names() {
        assert_eq!(full_name("ori"), Some("Orion"));
        assert_eq!(full_name("SER1"), Some("Serpens"));
        assert_eq!(full_name("SER2"), Some("Serpens"));
        assert_eq!(full_name("BOO"), Some("Bootes"));
        assert_eq!(full_name("ZZZ"), None);
        let distinct: std::collections::HashSet<_> = FULL_NAMES.values().collect();
        assert_eq!(distinct.len(), 88);
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let mut table = BoundaryTable::new();
        table.push_vertex("UMA", 8.0, 60.0);
        table.push_vertex("AND", 0.0, 30.0);
        table.push_vertex("UMA", 9.0, 60.0);
        let codes: Vec<_> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["UMA", "AND"]);
        assert_eq!(table.get("UMA").unwrap().len(), 2);
        assert_eq!(table.len(), 2);
    }
}
