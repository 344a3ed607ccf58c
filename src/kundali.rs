//! Chart assembly: birth details in, [`KundaliData`] out.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use log::{debug, warn};

use crate::dasha::current_dasha;
use crate::ephemeris::planet_positions;
use crate::errors::{CalculationResult, ComputationError, ValidationError};
use crate::strength::house_strengths;
use crate::time::{BirthMoment, ClockTime};
use crate::{
    format_dms, Ascendant, AyanamsaInfo, BirthDetails, CelestialBody, House, KundaliData,
    PlanetPosition, ValidatedBirth, ZodiacSign,
};

/// A chart together with whether it was computed or substituted.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Computed(KundaliData),
    Fallback(KundaliData),
}

impl ChartOutcome {
    pub fn data(&self) -> &KundaliData {
        match self {
            ChartOutcome::Computed(data) | ChartOutcome::Fallback(data) => data,
        }
    }

    pub fn into_data(self) -> KundaliData {
        match self {
            ChartOutcome::Computed(data) | ChartOutcome::Fallback(data) => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ChartOutcome::Fallback(_))
    }
}

/// Computes the chart with the dasha taken at today's local date.
pub fn compute_kundali(details: &BirthDetails) -> Result<ChartOutcome, ValidationError> {
    compute_kundali_on(details, Local::now().date_naive())
}

/// Computes the chart with the dasha taken at `today`.
///
/// Missing date, time or place is an error. Any failure after validation
/// yields [`ChartOutcome::Fallback`].
pub fn compute_kundali_on(
    details: &BirthDetails,
    today: NaiveDate,
) -> Result<ChartOutcome, ValidationError> {
    let birth = details.validate()?;
    let outcome = match assemble(&birth, today) {
        Ok(chart) => ChartOutcome::Computed(chart),
        Err(err) => {
            warn!(
                "chart for {} could not be computed ({}), using fallback chart",
                birth.place, err
            );
            ChartOutcome::Fallback(KundaliData::fallback())
        }
    };
    Ok(outcome)
}

/// Always returns a chart, the fallback one included when validation fails.
pub fn chart_or_fallback(details: &BirthDetails) -> KundaliData {
    match compute_kundali(details) {
        Ok(outcome) => outcome.into_data(),
        Err(err) => {
            warn!("{}, using fallback chart", err);
            KundaliData::fallback()
        }
    }
}

fn assemble(birth: &ValidatedBirth<'_>, today: NaiveDate) -> CalculationResult<KundaliData> {
    let clock = ClockTime::parse(birth.time)?;
    birth.location.validate()?;
    let moment = BirthMoment::new(birth.date, clock, birth.utc_offset_minutes)?;
    debug!("{} {} at {}: julian day {:.6}", birth.date, clock, birth.place, moment.julian_day);

    let ascendant = Ascendant::solve(moment.julian_day, &birth.location);
    let planets = planet_positions(&moment, &ascendant);

    let moon = find_planet(&planets, CelestialBody::Moon)?;
    let sun = find_planet(&planets, CelestialBody::Sun)?;
    let moon_sign = sign_label(moon);
    let sun_sign = sign_label(sun);

    let dasha = current_dasha(birth.date, today);
    let strengths = house_strengths(&planets);

    Ok(KundaliData {
        ascendant: ascendant.to_string(),
        moon_sign,
        sun_sign,
        current_dasha: dasha.to_string(),
        planets,
        strong_houses: strengths.strong,
        weak_houses: strengths.weak,
    })
}

fn find_planet(
    planets: &[PlanetPosition],
    body: CelestialBody,
) -> CalculationResult<&PlanetPosition> {
    planets
        .iter()
        .find(|p| p.planet() == body)
        .ok_or(ComputationError::MissingPlanet(body.name()))
}

fn sign_label(position: &PlanetPosition) -> String {
    format!("{} - {} Nakshatra", position.sign(), position.nakshatra())
}

// (body, sign, degree within sign)
const FALLBACK_PLACEMENTS: [(CelestialBody, ZodiacSign, f64); 9] = [
    (CelestialBody::Sun, ZodiacSign::Gemini, 5.0),
    (CelestialBody::Moon, ZodiacSign::Taurus, 18.0),
    (CelestialBody::Mercury, ZodiacSign::Gemini, 5.0),
    (CelestialBody::Venus, ZodiacSign::Taurus, 27.0),
    (CelestialBody::Mars, ZodiacSign::Aries, 22.0),
    (CelestialBody::Jupiter, ZodiacSign::Pisces, 17.0),
    (CelestialBody::Saturn, ZodiacSign::Capricorn, 12.0),
    (CelestialBody::Rahu, ZodiacSign::Gemini, 3.0),
    (CelestialBody::Ketu, ZodiacSign::Sagittarius, 3.0),
];

/// Planets of the fallback chart, housed from a Leo ascendant.
pub fn fallback_planets() -> Vec<PlanetPosition> {
    let ascendant = Ascendant::fallback();
    FALLBACK_PLACEMENTS
        .iter()
        .map(|&(body, sign, degree)| {
            PlanetPosition::new(body, sign.index() as f64 * 30.0 + degree, ascendant.sign)
        })
        .collect()
}

impl KundaliData {
    /// Fixed chart returned in place of one that could not be computed.
    pub fn fallback() -> Self {
        KundaliData {
            ascendant: ZodiacSign::Leo.to_string(),
            moon_sign: "Taurus - Rohini Nakshatra".to_string(),
            sun_sign: "Gemini - Mrigashira Nakshatra".to_string(),
            current_dasha: "Jupiter Mahadasha (2020-2036)".to_string(),
            planets: fallback_planets(),
            strong_houses: [House::First, House::Fifth, House::Ninth],
            weak_houses: [House::Sixth, House::Eighth, House::Twelfth],
        }
    }
}

/// Placement table of a chart, headed by the solar sign and Lahiri ayanamsa
/// of the birth date.
pub struct ChartDetails<'a> {
    chart: &'a KundaliData,
    birth: NaiveDate,
}

impl<'a> ChartDetails<'a> {
    pub fn new(chart: &'a KundaliData, birth: NaiveDate) -> Self {
        ChartDetails { chart, birth }
    }
}

impl fmt::Display for ChartDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let solar = ZodiacSign::indian_solar_sign(self.birth.day(), self.birth.month());
        writeln!(
            f,
            "Indian solar sign: {} ({}, {})",
            solar,
            solar.sanskrit(),
            solar.element()
        )?;
        let ayanamsa = AyanamsaInfo::lahiri(self.birth.year());
        writeln!(
            f,
            "{} ayanamsa: {}",
            ayanamsa.ayanamsa_name,
            format_dms(ayanamsa.ayanamsa_value)
        )?;
        writeln!(f, "Ascendant: {}", self.chart.ascendant)?;

        for position in &self.chart.planets {
            let info = position.nakshatra_info();
            writeln!(
                f,
                "{:<8} {:<10} {:<10} {} pada {} (lord {}), house {}, {}",
                position.planet().name(),
                position.sign().sanskrit(),
                format_dms(position.degree()),
                info.nakshatra.name(),
                info.pada,
                info.lord.name(),
                position.house().number(),
                position.dignity()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BirthField, Location, Nakshatra};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_delhi() -> BirthDetails {
        BirthDetails::new(date(1990, 6, 15), "14:30", "New Delhi").with_location(Location::delhi())
    }

    #[test]
    fn computes_new_delhi_chart() {
        let outcome = compute_kundali_on(&new_delhi(), date(2026, 10, 16)).unwrap();
        assert!(!outcome.is_fallback());
        let chart = outcome.data();
        assert_eq!(chart.ascendant, "Capricorn - 4°");
        assert_eq!(chart.moon_sign, "Aries - Ashwini Nakshatra");
        assert_eq!(chart.sun_sign, "Cancer - Pushya Nakshatra");
        assert_eq!(chart.current_dasha, "Mercury Mahadasha (2025-2042)");
        assert_eq!(chart.planets.len(), 9);
    }

    #[test]
    fn missing_fields_are_not_charted() {
        let details = BirthDetails {
            date: Some(date(1990, 6, 15)),
            ..Default::default()
        };
        let err = compute_kundali_on(&details, date(2026, 10, 16)).unwrap_err();
        assert_eq!(err.missing_fields(), &[BirthField::Time, BirthField::Place]);
    }

    #[test]
    fn malformed_time_yields_fallback() {
        let details = BirthDetails::new(date(1990, 6, 15), "half past two", "New Delhi");
        let outcome = compute_kundali_on(&details, date(2026, 10, 16)).unwrap();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_data(), KundaliData::fallback());
    }

    #[test]
    fn out_of_range_coordinates_yield_fallback() {
        let details = new_delhi().with_location(Location::new(123.0, 77.0));
        let outcome = compute_kundali_on(&details, date(2026, 10, 16)).unwrap();
        assert!(outcome.is_fallback());
    }

    #[test]
    fn polar_birth_uses_leo_ascendant() {
        let details = new_delhi().with_location(Location::new(90.0, 0.0));
        let outcome = compute_kundali_on(&details, date(2026, 10, 16)).unwrap();
        assert!(!outcome.is_fallback());
        let chart = outcome.data();
        assert_eq!(chart.ascendant, "Leo - 15°");
        assert_eq!(chart.ascendant_sign(), Some(ZodiacSign::Leo));
    }

    #[test]
    fn total_entry_point_never_fails() {
        assert_eq!(chart_or_fallback(&BirthDetails::default()), KundaliData::fallback());
        let chart = chart_or_fallback(&new_delhi());
        assert_eq!(chart.ascendant, "Capricorn - 4°");
    }

    #[test]
    fn fallback_chart_is_self_consistent() {
        let chart = KundaliData::fallback();
        let order: Vec<CelestialBody> = chart.planets.iter().map(|p| p.planet()).collect();
        assert_eq!(order, CelestialBody::ALL.to_vec());

        let houses: Vec<u8> = chart.planets.iter().map(|p| p.house().number()).collect();
        assert_eq!(houses, vec![11, 10, 11, 10, 9, 8, 6, 11, 5]);

        let moon = chart.planet(CelestialBody::Moon).unwrap();
        assert_eq!(moon.nakshatra(), Nakshatra::Rohini);
        assert_eq!(sign_label(moon), chart.moon_sign);
        let sun = chart.planet(CelestialBody::Sun).unwrap();
        assert_eq!(sun.nakshatra(), Nakshatra::Mrigashira);
        assert_eq!(sign_label(sun), chart.sun_sign);

        let rahu = chart.planet(CelestialBody::Rahu).unwrap();
        let ketu = chart.planet(CelestialBody::Ketu).unwrap();
        assert_eq!(ketu.house(), rahu.house().opposite());
        assert_eq!(chart.ascendant_sign(), Some(ZodiacSign::Leo));
    }

    #[test]
    fn details_table_of_fallback_chart() {
        let chart = KundaliData::fallback();
        let text = ChartDetails::new(&chart, date(1990, 6, 15)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Indian solar sign: Gemini (Mithuna, Air)");
        assert_eq!(lines[1], "Lahiri ayanamsa: 23°43'2\"");
        assert_eq!(lines[2], "Ascendant: Leo");
        assert!(lines[3].starts_with("Sun      Mithuna    5°0'0\""));
        assert!(lines[3].ends_with("Mrigashira pada 4 (lord Mars), house 11, neutral"));
        assert!(lines[4].ends_with("Rohini pada 3 (lord Moon), house 10, exalted"));
    }
}
