// src/lib.rs

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

pub mod ascendant;
pub mod dasha;
pub mod ephemeris;
pub mod errors;
pub mod interpretation;
pub mod kundali;
pub mod strength;
pub mod time;

pub use dasha::{current_dasha, mahadasha_timeline, Antardasha, DashaPeriod, VIMSHOTTARI};
pub use errors::{BirthField, CalculationResult, ComputationError, ValidationError};
pub use interpretation::{generate_insight, generate_response, Language, Topic};
pub use kundali::{
    chart_or_fallback, compute_kundali, compute_kundali_on, ChartDetails, ChartOutcome,
};
pub use strength::{house_strengths, Dignity, HouseScores, HouseStrengths};
pub use time::{BirthMoment, ClockTime, JulianDay};

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl CelestialBody {
    /// Chart order.
    pub const ALL: [CelestialBody; 9] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Rahu,
        CelestialBody::Ketu,
    ];

    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        Self::ALL.iter().copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Rahu => "Rahu",
            CelestialBody::Ketu => "Ketu",
        }
    }

    pub fn is_node(self) -> bool {
        matches!(self, CelestialBody::Rahu | CelestialBody::Ketu)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CelestialBody::iter()
            .find(|body| body.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown celestial body: {}", s))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).filter_map(House::from_index)
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Maps any integer onto 1..=12, treating it as a house count from the first.
    fn wrapping(n: usize) -> House {
        match House::from_index((n + 11) % 12 + 1) {
            Some(house) => house,
            None => House::First,
        }
    }

    /// The house `n` houses ahead counting this one as the first, so
    /// `nth_from(1)` is the house itself and `nth_from(7)` the opposite one.
    pub fn nth_from(self, n: u8) -> House {
        House::wrapping(self as usize + n as usize - 1)
    }

    pub fn opposite(self) -> House {
        self.nth_from(7)
    }

    /// Whole-sign house: the sign offset of a body from the ascendant sign.
    pub fn from_signs(body: ZodiacSign, ascendant: ZodiacSign) -> House {
        House::wrapping((body.index() + 12 - ascendant.index()) % 12 + 1)
    }

    /// House from the 30-degree offset of a longitude past the ascendant degree.
    pub fn from_longitudes(body_longitude: f64, ascendant_longitude: f64) -> House {
        let offset = (body_longitude - ascendant_longitude).rem_euclid(360.0);
        House::wrapping((offset / 30.0).floor() as usize % 12 + 1)
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.number()
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn from_longitude(longitude: f64) -> Self {
        let sign_index = (longitude.rem_euclid(360.0) / 30.0).floor() as usize;
        Self::from_index(sign_index)
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Rashi name.
    pub fn sanskrit(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Mesha",
            ZodiacSign::Taurus => "Vrishabha",
            ZodiacSign::Gemini => "Mithuna",
            ZodiacSign::Cancer => "Karka",
            ZodiacSign::Leo => "Simha",
            ZodiacSign::Virgo => "Kanya",
            ZodiacSign::Libra => "Tula",
            ZodiacSign::Scorpio => "Vrischika",
            ZodiacSign::Sagittarius => "Dhanu",
            ZodiacSign::Capricorn => "Makara",
            ZodiacSign::Aquarius => "Kumbha",
            ZodiacSign::Pisces => "Meena",
        }
    }

    pub fn element(self) -> &'static str {
        match self.index() % 4 {
            0 => "Fire",
            1 => "Earth",
            2 => "Air",
            _ => "Water",
        }
    }

    pub fn ruler(self) -> CelestialBody {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => CelestialBody::Mars,
            ZodiacSign::Taurus | ZodiacSign::Libra => CelestialBody::Venus,
            ZodiacSign::Gemini | ZodiacSign::Virgo => CelestialBody::Mercury,
            ZodiacSign::Cancer => CelestialBody::Moon,
            ZodiacSign::Leo => CelestialBody::Sun,
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => CelestialBody::Jupiter,
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => CelestialBody::Saturn,
        }
    }

    /// Sidereal solar sign from the approximate dates the Sun enters each rashi.
    pub fn indian_solar_sign(day: u32, month: u32) -> Self {
        // (month, first day) of each ingress, Mesha first.
        const INGRESS: [(u32, u32); 12] = [
            (4, 14),
            (5, 15),
            (6, 15),
            (7, 15),
            (8, 15),
            (9, 16),
            (10, 16),
            (11, 15),
            (12, 15),
            (1, 14),
            (2, 13),
            (3, 14),
        ];

        let on_or_after = |(m, d): (u32, u32)| month == m && day >= d;
        let before_next = |(m, d): (u32, u32)| month == m && day < d;

        for (index, ingress) in INGRESS.iter().enumerate() {
            let next = INGRESS[(index + 1) % 12];
            if on_or_after(*ingress) || before_next(next) {
                return Self::ALL[index];
            }
        }
        ZodiacSign::Aries
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown zodiac sign: {}", s))
    }
}

/// Width of one nakshatra: 13°20'.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

impl Nakshatra {
    pub const ALL: [Nakshatra; 27] = [
        Nakshatra::Ashwini,
        Nakshatra::Bharani,
        Nakshatra::Krittika,
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Ardra,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Ashlesha,
        Nakshatra::Magha,
        Nakshatra::PurvaPhalguni,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Vishakha,
        Nakshatra::Anuradha,
        Nakshatra::Jyeshtha,
        Nakshatra::Mula,
        Nakshatra::PurvaAshadha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishta,
        Nakshatra::Shatabhisha,
        Nakshatra::PurvaBhadrapada,
        Nakshatra::UttaraBhadrapada,
        Nakshatra::Revati,
    ];

    /// Intervals are half-open, so a boundary longitude belongs to the later nakshatra.
    pub fn from_longitude(longitude: f64) -> Nakshatra {
        let nakshatra_index = (longitude.rem_euclid(360.0) * 27.0 / 360.0).floor() as usize;
        Self::ALL[nakshatra_index % 27]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Vimshottari lord; the nine-lord dasha order repeats three times from Ashwini.
    pub fn lord(self) -> CelestialBody {
        VIMSHOTTARI[self.index() % VIMSHOTTARI.len()].0
    }

    /// `[start, end)` in degrees of sidereal longitude.
    pub fn span(self) -> (f64, f64) {
        let start = self.index() as f64 * NAKSHATRA_SPAN;
        (start, start + NAKSHATRA_SPAN)
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ---------------------------
// ## Structures
// ---------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub lord: CelestialBody,
    pub start_degree: f64,
    pub end_degree: f64,
}

impl NakshatraInfo {
    pub fn from_longitude(longitude: f64) -> NakshatraInfo {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let nakshatra = Nakshatra::from_longitude(normalized_longitude);
        let (start_degree, end_degree) = nakshatra.span();
        let pada_length = NAKSHATRA_SPAN / 4.0;
        let pada = ((normalized_longitude - start_degree) / pada_length)
            .floor()
            .clamp(0.0, 3.0) as u8
            + 1;
        NakshatraInfo {
            nakshatra,
            pada,
            lord: nakshatra.lord(),
            start_degree,
            end_degree,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AyanamsaInfo {
    pub ayanamsa_name: String,
    pub ayanamsa_value: f64,
}

impl AyanamsaInfo {
    /// Linear Lahiri approximation: 22.460° at 1900, precessing 50.3" a year.
    pub fn lahiri(year: i32) -> Self {
        AyanamsaInfo {
            ayanamsa_name: "Lahiri".to_string(),
            ayanamsa_value: 22.460 + f64::from(year - 1900) * 0.01397,
        }
    }
}

/// Ecliptic position and derived whole-sign placement of one body.
///
/// Sign, degree and nakshatra are always derived from `longitude`; there is
/// no way to set them independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    #[serde(rename = "name")]
    planet: CelestialBody,
    longitude: f64,
    sign: ZodiacSign,
    house: House,
    degree: f64,
    nakshatra: Nakshatra,
}

impl PlanetPosition {
    pub fn new(planet: CelestialBody, longitude: f64, ascendant_sign: ZodiacSign) -> Self {
        let longitude = longitude.rem_euclid(360.0);
        let house = House::from_signs(ZodiacSign::from_longitude(longitude), ascendant_sign);
        Self::with_house(planet, longitude, house)
    }

    pub(crate) fn with_house(planet: CelestialBody, longitude: f64, house: House) -> Self {
        let longitude = longitude.rem_euclid(360.0);
        PlanetPosition {
            planet,
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
            house,
            degree: longitude % 30.0,
            nakshatra: Nakshatra::from_longitude(longitude),
        }
    }

    pub fn planet(&self) -> CelestialBody {
        self.planet
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }

    pub fn house(&self) -> House {
        self.house
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    pub fn nakshatra(&self) -> Nakshatra {
        self.nakshatra
    }

    pub fn nakshatra_info(&self) -> NakshatraInfo {
        NakshatraInfo::from_longitude(self.longitude)
    }

    pub fn dignity(&self) -> Dignity {
        Dignity::of(self.planet, self.sign)
    }
}

/// First-house cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ascendant {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
}

impl Ascendant {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = longitude.rem_euclid(360.0);
        Ascendant {
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
            degree: longitude % 30.0,
        }
    }

    /// Leo 15°, used when the solver cannot place the ascendant.
    pub fn fallback() -> Self {
        Self::from_longitude(ZodiacSign::Leo.index() as f64 * 30.0 + 15.0)
    }

    pub fn house(&self) -> House {
        House::First
    }
}

impl fmt::Display for Ascendant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}°", self.sign, self.degree.floor() as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Location { latitude, longitude }
    }

    /// Reference location when birth details carry no coordinates.
    pub fn delhi() -> Self {
        Location { latitude: 28.6139, longitude: 77.2090 }
    }

    pub fn validate(&self) -> CalculationResult<()> {
        let in_range = self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0;
        if in_range {
            Ok(())
        } else {
            Err(ComputationError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::delhi()
    }
}

/// Birth details as entered by the user. `date`, `time` and `place` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub date: Option<NaiveDate>,
    /// Local clock time, `HH:MM`.
    pub time: Option<String>,
    pub place: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Offset of the local clock from UTC; UTC when absent.
    pub utc_offset_minutes: Option<i32>,
}

/// Birth details that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBirth<'a> {
    pub date: NaiveDate,
    pub time: &'a str,
    pub place: &'a str,
    pub location: Location,
    pub utc_offset_minutes: i32,
}

impl BirthDetails {
    pub fn new(date: NaiveDate, time: impl Into<String>, place: impl Into<String>) -> Self {
        BirthDetails {
            date: Some(date),
            time: Some(time.into()),
            place: Some(place.into()),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.latitude = Some(location.latitude);
        self.longitude = Some(location.longitude);
        self
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    /// Coordinates, each defaulting to the reference location independently.
    pub fn location(&self) -> Location {
        let reference = Location::delhi();
        Location {
            latitude: self.latitude.unwrap_or(reference.latitude),
            longitude: self.longitude.unwrap_or(reference.longitude),
        }
    }

    pub fn validate(&self) -> Result<ValidatedBirth<'_>, ValidationError> {
        fn present(value: &Option<String>) -> Option<&str> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
        }

        let time = present(&self.time);
        let place = present(&self.place);

        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push(BirthField::Date);
        }
        if time.is_none() {
            missing.push(BirthField::Time);
        }
        if place.is_none() {
            missing.push(BirthField::Place);
        }

        match (self.date, time, place) {
            (Some(date), Some(time), Some(place)) => Ok(ValidatedBirth {
                date,
                time,
                place,
                location: self.location(),
                utc_offset_minutes: self.utc_offset_minutes.unwrap_or(0),
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

/// Chart record handed to the UI and chat layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KundaliData {
    pub ascendant: String,
    pub moon_sign: String,
    pub sun_sign: String,
    pub current_dasha: String,
    pub planets: Vec<PlanetPosition>,
    pub strong_houses: [House; 3],
    pub weak_houses: [House; 3],
}

impl KundaliData {
    pub fn planet(&self, body: CelestialBody) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet() == body)
    }

    /// Sign named at the start of the ascendant string (`"Leo - 15°"` or `"Leo"`).
    pub fn ascendant_sign(&self) -> Option<ZodiacSign> {
        self.ascendant.split('-').next()?.parse().ok()
    }

    pub fn moon_sign_name(&self) -> Option<ZodiacSign> {
        self.moon_sign.split('-').next()?.parse().ok()
    }
}

// ---------------------------
// ## Utility Functions
// ---------------------------

/// Renders degrees as `D°M'S"`, truncating each component.
pub fn format_dms(degrees: f64) -> String {
    let whole = degrees.floor();
    let minutes_float = (degrees - whole) * 60.0;
    let minutes = minutes_float.floor();
    let seconds = ((minutes_float - minutes) * 60.0).floor();
    format!("{}°{}'{}\"", whole as i64, minutes as i64, seconds as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sign_from_longitude_wraps() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.9), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
    }

    #[test]
    fn nakshatra_boundary_belongs_to_later_mansion() {
        assert_eq!(Nakshatra::from_longitude(0.0), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_longitude(39.999), Nakshatra::Krittika);
        assert_eq!(Nakshatra::from_longitude(40.0), Nakshatra::Rohini);
        assert_eq!(Nakshatra::from_longitude(120.0), Nakshatra::Magha);
        assert_eq!(Nakshatra::from_longitude(359.99), Nakshatra::Revati);
    }

    #[test]
    fn nakshatra_spans_cover_the_circle() {
        let (start, _) = Nakshatra::Ashwini.span();
        let (_, end) = Nakshatra::Revati.span();
        assert_abs_diff_eq!(start, 0.0);
        assert_abs_diff_eq!(end, 360.0, epsilon = 1e-9);
        let (rohini_start, rohini_end) = Nakshatra::Rohini.span();
        assert_abs_diff_eq!(rohini_start, 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rohini_end - rohini_start, 13.0 + 20.0 / 60.0, epsilon = 1e-9);
    }

    #[test]
    fn nakshatra_lords_follow_vimshottari_order() {
        assert_eq!(Nakshatra::Ashwini.lord(), CelestialBody::Ketu);
        assert_eq!(Nakshatra::Ardra.lord(), CelestialBody::Rahu);
        assert_eq!(Nakshatra::Magha.lord(), CelestialBody::Ketu);
        assert_eq!(Nakshatra::Vishakha.lord(), CelestialBody::Jupiter);
        assert_eq!(Nakshatra::Revati.lord(), CelestialBody::Mercury);
    }

    #[test]
    fn nakshatra_info_padas() {
        let info = NakshatraInfo::from_longitude(40.0);
        assert_eq!(info.nakshatra, Nakshatra::Rohini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.lord, CelestialBody::Moon);
        assert_eq!(NakshatraInfo::from_longitude(53.3).pada, 4);
        assert_eq!(NakshatraInfo::from_longitude(47.0).pada, 3);
    }

    #[test]
    fn house_arithmetic() {
        assert_eq!(House::Sixth.opposite(), House::Twelfth);
        assert_eq!(House::First.opposite(), House::Seventh);
        assert_eq!(House::Tenth.nth_from(5), House::Second);
        assert_eq!(House::Twelfth.nth_from(1), House::Twelfth);
        assert_eq!(
            House::from_signs(ZodiacSign::Gemini, ZodiacSign::Leo),
            House::Eleventh
        );
        assert_eq!(
            House::from_signs(ZodiacSign::Leo, ZodiacSign::Leo),
            House::First
        );
        assert_eq!(House::from_longitudes(10.0, 20.0), House::Twelfth);
        assert_eq!(House::from_longitudes(50.0, 20.0), House::Second);
        assert_eq!(House::all().count(), 12);
    }

    #[test]
    fn planet_position_is_derived_from_longitude() {
        let position = PlanetPosition::new(CelestialBody::Moon, 398.0, ZodiacSign::Leo);
        assert_abs_diff_eq!(position.longitude(), 38.0, epsilon = 1e-9);
        assert_eq!(position.sign(), ZodiacSign::Taurus);
        assert_abs_diff_eq!(position.degree(), 8.0, epsilon = 1e-9);
        assert_eq!(position.nakshatra(), Nakshatra::Krittika);
        assert_eq!(position.house(), House::Tenth);
    }

    #[test]
    fn ascendant_display_truncates_degree() {
        let ascendant = Ascendant::from_longitude(274.2995);
        assert_eq!(ascendant.sign, ZodiacSign::Capricorn);
        assert_eq!(ascendant.to_string(), "Capricorn - 4°");
        assert_eq!(Ascendant::fallback().to_string(), "Leo - 15°");
        assert_eq!(ascendant.house(), House::First);
    }

    #[test]
    fn sign_metadata() {
        assert_eq!(ZodiacSign::Scorpio.sanskrit(), "Vrischika");
        assert_eq!(ZodiacSign::Cancer.element(), "Water");
        assert_eq!(ZodiacSign::Capricorn.element(), "Earth");
        assert_eq!(ZodiacSign::Aquarius.ruler(), CelestialBody::Saturn);
        assert_eq!("  leo ".parse::<ZodiacSign>(), Ok(ZodiacSign::Leo));
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn indian_solar_sign_ingress_dates() {
        assert_eq!(ZodiacSign::indian_solar_sign(14, 4), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::indian_solar_sign(13, 4), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::indian_solar_sign(15, 6), ZodiacSign::Gemini);
        assert_eq!(ZodiacSign::indian_solar_sign(14, 6), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::indian_solar_sign(1, 1), ZodiacSign::Sagittarius);
        assert_eq!(ZodiacSign::indian_solar_sign(16, 9), ZodiacSign::Virgo);
    }

    #[test]
    fn lahiri_ayanamsa() {
        assert_abs_diff_eq!(AyanamsaInfo::lahiri(1900).ayanamsa_value, 22.460);
        assert_abs_diff_eq!(
            AyanamsaInfo::lahiri(2000).ayanamsa_value,
            23.857,
            epsilon = 1e-9
        );
    }

    #[test]
    fn dms_formatting() {
        assert_eq!(format_dms(15.5), "15°30'0\"");
        assert_eq!(format_dms(0.0), "0°0'0\"");
    }

    #[test]
    fn validation_reports_missing_fields() {
        let empty = BirthDetails::default();
        assert_eq!(
            empty.validate().unwrap_err().missing_fields(),
            &[BirthField::Date, BirthField::Time, BirthField::Place]
        );

        let date = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let blank_place = BirthDetails::new(date, "14:30", "   ");
        assert_eq!(
            blank_place.validate().unwrap_err().missing_fields(),
            &[BirthField::Place]
        );

        let details = BirthDetails::new(date, "14:30", "New Delhi");
        let valid = details.validate().unwrap();
        assert_eq!(valid.location, Location::delhi());
        assert_eq!(valid.utc_offset_minutes, 0);
    }

    #[test]
    fn coordinates_default_independently() {
        let date = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let mut details = BirthDetails::new(date, "14:30", "Somewhere");
        details.latitude = Some(0.0);
        assert_eq!(details.location(), Location::new(0.0, 77.2090));
    }

    #[test]
    fn location_range_check() {
        assert!(Location::delhi().validate().is_ok());
        assert!(Location::new(91.0, 0.0).validate().is_err());
        assert!(Location::new(f64::NAN, 0.0).validate().is_err());
    }
}
