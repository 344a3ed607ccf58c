//! Mean-motion planetary positions.
//!
//! Each body advances linearly from its J2000 mean longitude. Ketu is not
//! modelled: it is placed opposite Rahu.

use chrono::Datelike;
use log::debug;

use crate::time::{BirthMoment, JulianDay, J2000};
use crate::{Ascendant, CelestialBody, PlanetPosition};

/// Mean longitude at J2000 and mean daily motion, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    pub body: CelestialBody,
    pub epoch_longitude: f64,
    pub daily_motion: f64,
}

const fn elements(body: CelestialBody, epoch_longitude: f64, daily_motion: f64) -> MeanElements {
    MeanElements {
        body,
        epoch_longitude,
        daily_motion,
    }
}

/// Modelled bodies in chart order. Rahu regresses.
pub const MEAN_ELEMENTS: [MeanElements; 8] = [
    elements(CelestialBody::Sun, 280.46, 0.9856474),
    elements(CelestialBody::Moon, 218.32, 13.17639648),
    elements(CelestialBody::Mercury, 252.25, 4.0923344),
    elements(CelestialBody::Venus, 181.98, 1.6021302),
    elements(CelestialBody::Mars, 355.43, 0.5240208),
    elements(CelestialBody::Jupiter, 34.35, 0.0830853),
    elements(CelestialBody::Saturn, 50.08, 0.0334442),
    elements(CelestialBody::Rahu, 125.04, -0.0529539),
];

/// Largest per-birth offset added to every mean longitude, in degrees.
pub const MAX_PERSONAL_VARIATION: f64 = 15.0;

impl MeanElements {
    pub fn for_body(body: CelestialBody) -> Option<&'static MeanElements> {
        MEAN_ELEMENTS.iter().find(|e| e.body == body)
    }

    /// Unnormalized mean longitude.
    pub fn mean_longitude(&self, jd: JulianDay) -> f64 {
        self.epoch_longitude + self.daily_motion * (jd - J2000)
    }
}

/// Per-birth factor in [0, 1) from the locally entered day, month and clock time.
pub fn personal_factor(day: u32, month: u32, hour: u32, minute: u32) -> f64 {
    let seed =
        f64::from(day) + f64::from(month) * 30.0 + f64::from(hour) + f64::from(minute) / 60.0;
    seed.rem_euclid(30.0) / 30.0
}

/// Offset applied to every body for this birth; the same for all of them.
pub fn personal_variation(birth: &BirthMoment) -> f64 {
    let factor = personal_factor(
        birth.local_date.day(),
        birth.local_date.month(),
        birth.clock.hour,
        birth.clock.minute,
    );
    MAX_PERSONAL_VARIATION * factor
}

/// Ketu at Rahu's longitude plus a half turn, housed opposite Rahu.
pub fn ketu_from_rahu(rahu: &PlanetPosition) -> PlanetPosition {
    PlanetPosition::with_house(
        CelestialBody::Ketu,
        rahu.longitude() + 180.0,
        rahu.house().opposite(),
    )
}

/// All nine bodies in chart order with whole-sign houses from `ascendant`.
pub fn planet_positions(birth: &BirthMoment, ascendant: &Ascendant) -> Vec<PlanetPosition> {
    let variation = personal_variation(birth);
    debug!("personal variation {:.4}° at jd {:.6}", variation, birth.julian_day);

    let mut positions: Vec<PlanetPosition> = MEAN_ELEMENTS
        .iter()
        .map(|e| {
            let longitude = e.mean_longitude(birth.julian_day) + variation;
            PlanetPosition::new(e.body, longitude, ascendant.sign)
        })
        .collect();

    if let Some(rahu) = positions.iter().find(|p| p.planet() == CelestialBody::Rahu) {
        let ketu = ketu_from_rahu(rahu);
        positions.push(ketu);
    }

    positions
}
