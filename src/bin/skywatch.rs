//! Skywatch command line tool
//!
//! Observe a planet, catalog star or fixed position from a site, search for
//! its rise, set and transit, or look up its constellation.
//!
//! Usage:
//!   cargo run --bin skywatch -- --lat 51.48 --lon 0.0 observe --planet jupiter
//!   cargo run --bin skywatch -- --lat 51.48 --lon 0.0 events --ra 5.92 --dec 7.41 --hours 24
//!   cargo run --bin skywatch -- constellation --ra 12.62 --dec 25.0

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use clap::{Args, Parser, Subcommand};
use flexi_logger::Logger;
use log::info;
use serde::Serialize;

use skywatch::almanac::{find_rise_time, find_set_time, find_transit_time};
use skywatch::catalogs::{load_boundaries_file, StarCatalog};
use skywatch::config::SiteConfig;
use skywatch::constellations::find_constellation;
use skywatch::{
    Body, CelestialBody, CelestialObject, Equatorial, Loader, ObservedObject, Observer, Planet,
    Star,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Observational astronomy from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Observer elevation in metres
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Altitude, azimuth and hour angle of a target
    Observe {
        #[command(flatten)]
        target: Target,

        /// UTC instant (RFC 3339); defaults to now
        #[arg(long)]
        time: Option<DateTime<Utc>>,
    },
    /// Rise, set and transit of a target within a window
    Events {
        #[command(flatten)]
        target: Target,

        /// Window start (RFC 3339); defaults to now
        #[arg(long)]
        start: Option<DateTime<Utc>>,

        /// Window length in hours
        #[arg(long, default_value_t = 24)]
        hours: i64,
    },
    /// Constellation containing a target
    Constellation {
        #[command(flatten)]
        target: Target,

        /// Boundary file; downloaded to the cache when omitted
        #[arg(long)]
        boundaries: Option<PathBuf>,

        /// Instant for planet positions (RFC 3339); defaults to now
        #[arg(long)]
        time: Option<DateTime<Utc>>,
    },
}

#[derive(Args, Debug)]
struct Target {
    /// Solar system body (sun, mercury, ..., neptune)
    #[arg(long, conflicts_with_all = ["ra", "hip"])]
    planet: Option<Body>,

    /// Hipparcos catalog number
    #[arg(long, conflicts_with = "ra")]
    hip: Option<u32>,

    /// Right ascension in hours
    #[arg(long, requires = "dec")]
    ra: Option<f64>,

    /// Declination in degrees
    #[arg(long, requires = "ra", allow_hyphen_values = true)]
    dec: Option<f64>,
}

#[derive(Serialize)]
struct ObserveReport {
    target: String,
    time: DateTime<Utc>,
    right_ascension_hours: f64,
    declination_degrees: f64,
    #[serde(flatten)]
    observed: ObservedObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    planet: Option<Planet>,
}

#[derive(Serialize)]
struct EventsReport {
    target: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    rise: Option<DateTime<Utc>>,
    set: Option<DateTime<Utc>>,
    transit: Option<DateTime<Utc>>,
    transit_altitude_degrees: Option<f64>,
}

#[derive(Serialize)]
struct ConstellationReport {
    target: String,
    constellation: String,
}

impl Target {
    fn label(&self) -> String {
        match (self.planet, self.hip, self.ra, self.dec) {
            (Some(body), _, _, _) => body.to_string(),
            (_, Some(hip), _, _) => format!("HIP {}", hip),
            (_, _, Some(ra), Some(dec)) => format!("RA {}h Dec {}", ra, dec),
            _ => "unknown".to_string(),
        }
    }

    /// Build the body as of `time`
    fn resolve(&self, loader: &Loader, time: DateTime<Utc>) -> Result<CelestialBody> {
        if let Some(body) = self.planet {
            return Ok(Planet::at(body, time)?.into());
        }
        if let Some(hip) = self.hip {
            let catalog = loader.load_hipparcos_catalog(f64::MAX)?;
            info!("loaded {} Hipparcos stars", catalog.len());
            return Ok(catalog.from_hip(hip)?.clone().into());
        }
        match (self.ra, self.dec) {
            (Some(ra), Some(dec)) => Ok(Star::new(ra, dec)?.into()),
            _ => Err("specify --planet, --hip or --ra/--dec".into()),
        }
    }
}

fn observer_from(cli: &Cli, site: Option<&SiteConfig>) -> Observer {
    let base = site.map(SiteConfig::observer).unwrap_or_default();
    Observer::new(
        cli.lat.unwrap_or(base.latitude),
        cli.lon.unwrap_or(base.longitude),
        if cli.elevation != 0.0 { cli.elevation } else { base.elevation },
    )
}

fn print<T: Serialize>(json: bool, report: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let site = cli.config.as_ref().map(SiteConfig::load).transpose()?;
    let loader = site.as_ref().map(SiteConfig::loader).unwrap_or_default();
    let observer = observer_from(&cli, site.as_ref());

    match &cli.command {
        Command::Observe { target, time } => {
            let time = time.unwrap_or_else(Utc::now);
            let body = target.resolve(&loader, time)?;
            let position: Equatorial = body.equatorial();
            let observed = observer.observe(&body, time);
            let planet = match &body {
                CelestialBody::Planet(p) => Some(p.clone()),
                CelestialBody::Star(_) => None,
            };

            let report = ObserveReport {
                target: target.label(),
                time,
                right_ascension_hours: position.ra_hours(),
                declination_degrees: position.dec_degrees(),
                observed,
                planet,
            };
            print(cli.json, &report, || {
                let mut text = format!(
                    "{} at {}\n  RA {}  Dec {}\n  Alt {}  Az {}  HA {}",
                    report.target,
                    report.time,
                    position.ra,
                    position.dec,
                    observed.altitude,
                    observed.azimuth,
                    observed.hour_angle
                );
                if let Some(p) = &report.planet {
                    text.push_str(&format!(
                        "\n  distance {:.6} au  phase {}  illuminated {:.1}%  size {:.2}\"",
                        p.earth_distance().au(),
                        p.phase_angle(),
                        p.illumination() * 100.0,
                        p.angular_diameter().to_arcseconds()
                    ));
                    if let Some(mag) = p.magnitude() {
                        text.push_str(&format!("  mag {:.2}", mag));
                    }
                }
                text
            })
        }
        Command::Events {
            target,
            start,
            hours,
        } => {
            let start = start.unwrap_or_else(Utc::now);
            let end = start + Duration::hours(*hours);
            // Planets move slowly enough that the start position serves the whole window
            let body = target.resolve(&loader, start)?;

            let rise = find_rise_time(&observer, &body, start, end);
            let set = find_set_time(&observer, &body, start, end);
            let transit = find_transit_time(&observer, &body, start, end);

            let report = EventsReport {
                target: target.label(),
                start,
                end,
                rise,
                set,
                transit: transit.map(|(t, _)| t),
                transit_altitude_degrees: transit.map(|(_, alt)| alt.to_degrees()),
            };
            let show = |t: Option<DateTime<Utc>>| {
                t.map(|t| t.to_rfc3339()).unwrap_or_else(|| "not found".to_string())
            };
            print(cli.json, &report, || {
                format!(
                    "{} between {} and {}\n  rise    {}\n  set     {}\n  transit {}{}",
                    report.target,
                    report.start,
                    report.end,
                    show(report.rise),
                    show(report.set),
                    show(report.transit),
                    report
                        .transit_altitude_degrees
                        .map(|alt| format!(" (altitude {:.2} deg)", alt))
                        .unwrap_or_default()
                )
            })
        }
        Command::Constellation {
            target,
            boundaries,
            time,
        } => {
            let table = match boundaries {
                Some(path) => load_boundaries_file(path)?,
                None => loader.load_boundaries()?,
            };
            let body = target.resolve(&loader, time.unwrap_or_else(Utc::now))?;
            let report = ConstellationReport {
                target: target.label(),
                constellation: find_constellation(&body, &table)?,
            };
            print(cli.json, &report, || {
                format!("{}: {}", report.target, report.constellation)
            })
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone());
    let _logger = Logger::try_with_str(&level)?.log_to_stderr().start()?;

    run(cli)
}
