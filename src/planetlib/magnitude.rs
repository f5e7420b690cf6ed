//! Apparent magnitude models
//!
//! Closed-form fits from Mallama & Hilton (2018), "Computing apparent
//! planetary magnitudes for The Astronomical Almanac". Inputs are the
//! heliocentric distance `r` and geocentric distance `delta` in AU and the
//! phase angle in degrees.
//!
//! Saturn and the ice giants need ring tilt or sub-observer latitude and are
//! not modelled.

use super::{Body, PlanetError};

/// Apparent visual magnitude of a planet
///
/// Regime switches are hard cuts with no smoothing:
/// - Venus uses the second polynomial from 163.7° upward
/// - Mars uses the first polynomial up to and including 50°
/// - Jupiter uses the low-phase formula up to and including 12°
pub fn apparent_magnitude(
    body: Body,
    r: f64,
    delta: f64,
    phase_deg: f64,
) -> Result<f64, PlanetError> {
    match body {
        Body::Mercury => Ok(mercury(r, delta, phase_deg)),
        Body::Venus => Ok(venus(r, delta, phase_deg)),
        Body::Earth => Ok(earth(r, delta, phase_deg)),
        Body::Mars => Ok(mars(r, delta, phase_deg)),
        Body::Jupiter => Ok(jupiter(r, delta, phase_deg)),
        other => Err(PlanetError::UnsupportedBody(other)),
    }
}

/// Whether a magnitude model exists for the body
pub fn is_supported(body: Body) -> bool {
    matches!(
        body,
        Body::Mercury | Body::Venus | Body::Earth | Body::Mars | Body::Jupiter
    )
}

fn distance_term(r: f64, delta: f64) -> f64 {
    5.0 * (r * delta).log10()
}

fn mercury(r: f64, delta: f64, ph: f64) -> f64 {
    let phase_term = 6.3280e-02 * ph - 1.6336e-03 * ph.powi(2) + 3.3644e-05 * ph.powi(3)
        - 3.4265e-07 * ph.powi(4)
        + 1.6893e-09 * ph.powi(5)
        - 3.0334e-12 * ph.powi(6);

    -0.613 + distance_term(r, delta) + phase_term
}

fn venus(r: f64, delta: f64, ph: f64) -> f64 {
    // Coefficients a0..a4 of the phase polynomial, Horner order
    let (a0, a1, a2, a3, a4) = if ph < 163.7 {
        (0.0, -1.044e-03, 3.687e-04, -2.814e-06, 8.938e-09)
    } else {
        (236.05828 + 4.384, -2.81914e+00, 8.39034e-03, 0.0, 0.0)
    };

    let phase_term = (((a4 * ph + a3) * ph + a2) * ph + a1) * ph + a0;

    -4.384 + distance_term(r, delta) + phase_term
}

fn earth(r: f64, delta: f64, ph: f64) -> f64 {
    let phase_term = -1.060e-03 * ph + 2.054e-04 * ph.powi(2);
    -3.99 + distance_term(r, delta) + phase_term
}

fn mars(r: f64, delta: f64, ph: f64) -> f64 {
    let distance = 2.5 * (r * r).log10() + 2.5 * (delta * delta).log10();

    let (base, a, b) = if ph <= 50.0 {
        (-1.601, 2.267e-02, -1.302e-04)
    } else {
        (-0.367, -0.02573, 0.0003445)
    };

    base + distance + a * ph + b * ph * ph
}

fn jupiter(r: f64, delta: f64, ph: f64) -> f64 {
    let distance = distance_term(r, delta);

    if ph <= 12.0 {
        return -9.395 + distance + (6.16e-04 * ph - 3.7e-04) * ph;
    }

    let x = ph / 180.0;
    let poly = ((((-1.876 * x + 2.809) * x - 0.062) * x - 0.363) * x - 1.507) * x + 1.0;
    -9.428 + distance - 2.5 * poly.log10()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Body::Mercury, -0.613)]
    #[case(Body::Venus, -4.384)]
    #[case(Body::Earth, -3.99)]
    #[case(Body::Mars, -1.601)]
    #[case(Body::Jupiter, -9.395)]
    fn test_absolute_magnitude_at_unit_distance(#[case] body: Body, #[case] expected: f64) {
        let mag = apparent_magnitude(body, 1.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(mag, expected, epsilon = 1e-12);
    }

    #[rstest]
    #[case(Body::Sun)]
    #[case(Body::Saturn)]
    #[case(Body::Uranus)]
    #[case(Body::Neptune)]
    fn test_unsupported_bodies(#[case] body: Body) {
        assert!(!is_supported(body));
        assert!(matches!(
            apparent_magnitude(body, 1.0, 1.0, 0.0),
            Err(PlanetError::UnsupportedBody(b)) if b == body
        ));
    }

    #[test]
    fn test_venus_boundary_takes_high_phase_branch() {
        let at = apparent_magnitude(Body::Venus, 1.0, 1.0, 163.7).unwrap();
        let expected = -4.384 + (236.05828 + 4.384) - 2.81914 * 163.7 + 8.39034e-03 * 163.7 * 163.7;
        assert_relative_eq!(at, expected, epsilon = 1e-9);

        let below = apparent_magnitude(Body::Venus, 1.0, 1.0, 163.699_999).unwrap();
        let low_branch = -4.384
            + (((8.938e-09 * 163.699_999 - 2.814e-06) * 163.699_999 + 3.687e-04) * 163.699_999
                - 1.044e-03)
                * 163.699_999;
        assert_relative_eq!(below, low_branch, epsilon = 1e-9);
    }

    #[test]
    fn test_mars_boundary_takes_low_phase_branch() {
        let at = apparent_magnitude(Body::Mars, 1.0, 1.0, 50.0).unwrap();
        let expected = -1.601 + 2.267e-02 * 50.0 - 1.302e-04 * 2500.0;
        assert_relative_eq!(at, expected, epsilon = 1e-12);

        let above = apparent_magnitude(Body::Mars, 1.0, 1.0, 50.000_001).unwrap();
        let high = -0.367 - 0.02573 * 50.000_001 + 0.0003445 * 50.000_001 * 50.000_001;
        assert_relative_eq!(above, high, epsilon = 1e-9);
    }

    #[test]
    fn test_jupiter_regimes() {
        let low = apparent_magnitude(Body::Jupiter, 5.2, 4.2, 12.0).unwrap();
        let distance = 5.0 * (5.2_f64 * 4.2).log10();
        assert_relative_eq!(low, -9.395 + distance + (6.16e-04 * 12.0 - 3.7e-04) * 12.0, epsilon = 1e-12);

        let high = apparent_magnitude(Body::Jupiter, 5.2, 4.2, 20.0).unwrap();
        assert!(high.is_finite());
        assert!(high > -9.428 + distance);
    }

    #[test]
    fn test_distance_dimming() {
        let near = apparent_magnitude(Body::Mercury, 0.4, 0.8, 60.0).unwrap();
        let far = apparent_magnitude(Body::Mercury, 0.4, 1.2, 60.0).unwrap();
        assert!(far > near);
    }
}
