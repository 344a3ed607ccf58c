//! Vimshottari dasha: the 120-year cycle of nine planetary periods.
//!
//! The starting lord is read from a seed built from the birth date rather than
//! from the Moon's nakshatra, and periods are counted in whole calendar years.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::CelestialBody;

/// Lords in dasha order with their mahadasha length in years.
pub const VIMSHOTTARI: [(CelestialBody, u32); 9] = [
    (CelestialBody::Ketu, 7),
    (CelestialBody::Venus, 20),
    (CelestialBody::Sun, 6),
    (CelestialBody::Moon, 10),
    (CelestialBody::Mars, 7),
    (CelestialBody::Rahu, 18),
    (CelestialBody::Jupiter, 16),
    (CelestialBody::Saturn, 19),
    (CelestialBody::Mercury, 17),
];

pub const DASHA_CYCLE_YEARS: u32 = 120;

/// Mahadasha years for `lord`.
pub fn dasha_years(lord: CelestialBody) -> u32 {
    VIMSHOTTARI
        .iter()
        .find(|(body, _)| *body == lord)
        .map(|(_, years)| *years)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashaPeriod {
    pub lord: CelestialBody,
    pub years: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl DashaPeriod {
    fn new(lord: CelestialBody, years: u32, start_year: i32) -> Self {
        DashaPeriod {
            lord,
            years,
            start_year,
            end_year: start_year + years as i32,
        }
    }

    /// Nine sub-periods starting with this period's own lord, each lasting
    /// `years * lord_years / 120`.
    pub fn antardashas(&self) -> Vec<Antardasha> {
        let first = lord_index(self.lord);
        let mut start = f64::from(self.start_year);
        (0..VIMSHOTTARI.len())
            .map(|offset| {
                let (sub_lord, sub_years) = VIMSHOTTARI[(first + offset) % VIMSHOTTARI.len()];
                let years =
                    f64::from(self.years) * f64::from(sub_years) / f64::from(DASHA_CYCLE_YEARS);
                let antardasha = Antardasha {
                    maha_lord: self.lord,
                    lord: sub_lord,
                    years,
                    start_year: start,
                    end_year: start + years,
                };
                start += years;
                antardasha
            })
            .collect()
    }
}

impl fmt::Display for DashaPeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} Mahadasha ({}-{})", self.lord, self.start_year, self.end_year)
    }
}

/// Sub-period within a mahadasha, in fractional years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antardasha {
    pub maha_lord: CelestialBody,
    pub lord: CelestialBody,
    pub years: f64,
    pub start_year: f64,
    pub end_year: f64,
}

impl fmt::Display for Antardasha {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{} ({:.2}-{:.2})", self.maha_lord, self.lord, self.start_year, self.end_year)
    }
}

fn lord_index(lord: CelestialBody) -> usize {
    VIMSHOTTARI
        .iter()
        .position(|(body, _)| *body == lord)
        .unwrap_or(0)
}

pub fn birth_seed(birth: NaiveDate) -> u32 {
    birth.day() + birth.month() * 30 + birth.year().rem_euclid(100) as u32
}

/// Index into [`VIMSHOTTARI`] of the lord running at birth.
pub fn starting_lord_index(birth: NaiveDate) -> usize {
    let nakshatra_index = birth_seed(birth) % 27;
    nakshatra_index as usize % VIMSHOTTARI.len()
}

/// Completed years of age on `today`; zero when `today` precedes the birth.
pub fn years_elapsed(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// The nine mahadashas of the first cycle, starting in the birth year.
pub fn mahadasha_timeline(birth: NaiveDate) -> Vec<DashaPeriod> {
    let first = starting_lord_index(birth);
    let mut start_year = birth.year();
    (0..VIMSHOTTARI.len())
        .map(|offset| {
            let (lord, years) = VIMSHOTTARI[(first + offset) % VIMSHOTTARI.len()];
            let period = DashaPeriod::new(lord, years, start_year);
            start_year = period.end_year;
            period
        })
        .collect()
}

/// Mahadasha running on `today`. Ages past a full cycle wrap around, and the
/// period is always reported with its years in the first cycle.
pub fn current_dasha(birth: NaiveDate, today: NaiveDate) -> DashaPeriod {
    let elapsed = years_elapsed(birth, today);
    let position = birth.year() + (elapsed % DASHA_CYCLE_YEARS) as i32;

    let timeline = mahadasha_timeline(birth);
    let index = timeline
        .iter()
        .position(|period| period.end_year > position)
        .unwrap_or(timeline.len() - 1);
    let period = timeline[index];

    debug!(
        "dasha: seed {}, {} years elapsed, {}",
        birth_seed(birth),
        elapsed,
        period
    );
    period
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cycle_totals_120_years() {
        let total: u32 = VIMSHOTTARI.iter().map(|(_, years)| years).sum();
        assert_eq!(total, DASHA_CYCLE_YEARS);
        assert_eq!(dasha_years(CelestialBody::Venus), 20);
    }

    #[test]
    fn starting_lord_from_birth_seed() {
        let birth = date(1990, 6, 15);
        assert_eq!(birth_seed(birth), 285);
        assert_eq!(VIMSHOTTARI[starting_lord_index(birth)].0, CelestialBody::Jupiter);
        assert_eq!(VIMSHOTTARI[starting_lord_index(date(2000, 1, 1))].0, CelestialBody::Mars);
    }

    #[test]
    fn years_elapsed_counts_completed_birthdays() {
        let birth = date(1990, 6, 15);
        assert_eq!(years_elapsed(birth, date(2025, 6, 14)), 34);
        assert_eq!(years_elapsed(birth, date(2025, 6, 15)), 35);
        assert_eq!(years_elapsed(birth, date(1980, 1, 1)), 0);
    }

    #[test]
    fn current_mahadasha() {
        let birth = date(1990, 6, 15);
        assert_eq!(
            current_dasha(birth, date(2026, 10, 16)).to_string(),
            "Mercury Mahadasha (2025-2042)"
        );
        assert_eq!(
            current_dasha(birth, date(2025, 6, 14)).to_string(),
            "Saturn Mahadasha (2006-2025)"
        );
        assert_eq!(current_dasha(birth, date(2025, 6, 15)).lord, CelestialBody::Mercury);
        assert_eq!(
            current_dasha(birth, date(1990, 6, 15)).to_string(),
            "Jupiter Mahadasha (1990-2006)"
        );
    }

    #[test]
    fn wraps_after_a_full_cycle() {
        let birth = date(1990, 6, 15);
        assert_eq!(
            current_dasha(birth, date(2120, 6, 15)).to_string(),
            "Jupiter Mahadasha (1990-2006)"
        );
        assert_eq!(
            current_dasha(birth, date(2110, 6, 15)),
            current_dasha(birth, date(1990, 6, 15))
        );
    }

    #[test]
    fn centenarian_reads_first_cycle_years() {
        let birth = date(1900, 6, 15);
        assert_eq!(birth_seed(birth), 195);
        assert_eq!(VIMSHOTTARI[starting_lord_index(birth)].0, CelestialBody::Jupiter);
        // 126 years elapsed wraps to 6 years into the cycle
        assert_eq!(
            current_dasha(birth, date(2026, 10, 16)).to_string(),
            "Jupiter Mahadasha (1900-1916)"
        );
    }

    #[test]
    fn future_birth_starts_the_cycle() {
        let birth = date(2000, 1, 1);
        assert_eq!(
            current_dasha(birth, date(1999, 1, 1)).to_string(),
            "Mars Mahadasha (2000-2007)"
        );
    }

    #[test]
    fn timeline_is_contiguous() {
        let birth = date(1990, 6, 15);
        let timeline = mahadasha_timeline(birth);
        assert_eq!(timeline.len(), 9);
        assert_eq!(timeline[0].start_year, 1990);
        assert_eq!(timeline[8].end_year, 2110);
        for pair in timeline.windows(2) {
            assert_eq!(pair[0].end_year, pair[1].start_year);
        }
        assert_eq!(timeline[3].lord, CelestialBody::Ketu);
    }

    #[test]
    fn antardashas_fill_the_mahadasha() {
        let jupiter = mahadasha_timeline(date(1990, 6, 15))[0];
        let subs = jupiter.antardashas();
        assert_eq!(subs.len(), 9);
        assert_eq!(subs[0].lord, CelestialBody::Jupiter);
        assert_eq!(subs[1].lord, CelestialBody::Saturn);
        assert_abs_diff_eq!(subs[0].years, 16.0 * 16.0 / 120.0, epsilon = 1e-12);
        let total: f64 = subs.iter().map(|s| s.years).sum();
        assert_abs_diff_eq!(total, 16.0, epsilon = 1e-9);
        assert_abs_diff_eq!(subs[8].end_year, 2006.0, epsilon = 1e-9);
    }
}
