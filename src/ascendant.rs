//! Sidereal time and the ascendant (lagna).
//!
//! Polynomials from Meeus, "Astronomical Algorithms", chapters 12, 13 and 22.
//! The ascendant uses the single-argument arctangent with an explicit
//! half-turn correction when `cos(LST) > 0`.

use log::{debug, warn};

use crate::errors::{CalculationResult, ComputationError};
use crate::time::{day_fraction, JulianDay, J2000};
use crate::{Ascendant, Location};

/// Julian centuries of 36525 days since J2000.
pub fn julian_centuries(jd: JulianDay) -> f64 {
    (jd - J2000) / 36525.0
}

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn greenwich_mean_sidereal_time(t: f64) -> f64 {
    let gmst = 100.46061837 + 36000.770053608 * t + 0.000387933 * t * t - t * t * t / 38710000.0;
    gmst.rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east-positive longitude.
///
/// The Earth's rotation within the current day is added as a full turn per
/// civil day on top of the century polynomial.
pub fn local_sidereal_time(jd: JulianDay, east_longitude: f64) -> f64 {
    let gmst = greenwich_mean_sidereal_time(julian_centuries(jd));
    (gmst + day_fraction(jd) * 360.0 + east_longitude).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn obliquity_of_ecliptic(t: f64) -> f64 {
    23.4392911 - 0.0130042 * t - 0.00000164 * t * t + 0.000000503 * t * t * t
}

/// Ecliptic longitude of the ascendant in degrees, [0, 360).
pub fn ascendant_longitude(jd: JulianDay, location: &Location) -> CalculationResult<f64> {
    location.validate()?;
    if !jd.is_finite() {
        return Err(ComputationError::InvalidDate(format!("julian day {}", jd)));
    }
    if location.latitude.abs() >= 90.0 {
        return Err(ComputationError::DegenerateAscendant {
            latitude: location.latitude,
        });
    }

    let t = julian_centuries(jd);
    let lst = local_sidereal_time(jd, location.longitude);
    let eps = obliquity_of_ecliptic(t).to_radians();
    let phi = location.latitude.to_radians();
    let lst_rad = lst.to_radians();

    let numerator = -lst_rad.cos();
    let denominator = lst_rad.sin() * eps.cos() + phi.tan() * eps.sin();
    let mut asc = (numerator / denominator).atan().to_degrees();
    if lst_rad.cos() > 0.0 {
        asc += 180.0;
    }

    if !asc.is_finite() {
        return Err(ComputationError::DegenerateAscendant {
            latitude: location.latitude,
        });
    }

    let asc = asc.rem_euclid(360.0);
    debug!("jd {:.6}: lst {:.4}°, ascendant {:.4}°", jd, lst, asc);
    Ok(asc)
}

impl Ascendant {
    /// Solves the ascendant, substituting [`Ascendant::fallback`] when the
    /// formula cannot be evaluated for this place and time.
    pub fn solve(jd: JulianDay, location: &Location) -> Ascendant {
        match ascendant_longitude(jd, location) {
            Ok(longitude) => Ascendant::from_longitude(longitude),
            Err(err) => {
                warn!("ascendant unavailable ({}), using {}", err, Ascendant::fallback());
                Ascendant::fallback()
            }
        }
    }
}
