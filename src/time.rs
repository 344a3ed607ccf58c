//! Calendar and clock handling: `HH:MM` parsing, local to UTC, Julian Day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::errors::{CalculationResult, ComputationError};

pub type JulianDay = f64;

/// 2000-01-01 12:00 UT.
pub const J2000: JulianDay = 2451545.0;

/// First day of the Gregorian calendar; earlier dates are read as Julian calendar dates.
const GREGORIAN_REFORM: (i32, u32, u32) = (1582, 10, 15);

/// Wall-clock time of birth with minute precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> CalculationResult<Self> {
        if hour < 24 && minute < 60 {
            Ok(ClockTime { hour, minute })
        } else {
            Err(ComputationError::InvalidTime(format!("{:02}:{:02}", hour, minute)))
        }
    }

    pub fn parse(text: &str) -> CalculationResult<Self> {
        let invalid = || ComputationError::InvalidTime(text.to_string());

        let (hour, minute) = text.trim().split_once(':').ok_or_else(invalid)?;
        let component = |part: &str| -> CalculationResult<u32> {
            let part = part.trim();
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        ClockTime::new(component(hour)?, component(minute)?).map_err(|_| invalid())
    }

    pub fn decimal_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl FromStr for ClockTime {
    type Err = ComputationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClockTime::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A birth instant, keeping the locally entered values next to the UTC instant
/// and its Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub local_date: NaiveDate,
    pub clock: ClockTime,
    pub utc: NaiveDateTime,
    pub julian_day: JulianDay,
}

impl BirthMoment {
    pub fn new(
        local_date: NaiveDate,
        clock: ClockTime,
        utc_offset_minutes: i32,
    ) -> CalculationResult<Self> {
        let utc = to_utc(local_date, clock, utc_offset_minutes)?;
        Ok(BirthMoment {
            local_date,
            clock,
            utc,
            julian_day: date_to_julian_day(utc),
        })
    }
}

/// Shifts a local wall-clock reading to UTC, rolling the date when needed.
pub fn to_utc(
    local_date: NaiveDate,
    clock: ClockTime,
    utc_offset_minutes: i32,
) -> CalculationResult<NaiveDateTime> {
    let time = clock
        .to_naive_time()
        .ok_or_else(|| ComputationError::InvalidTime(clock.to_string()))?;
    local_date
        .and_time(time)
        .checked_sub_signed(Duration::minutes(i64::from(utc_offset_minutes)))
        .ok_or_else(|| {
            ComputationError::InvalidDate(format!(
                "{} {} offset {}",
                local_date, clock, utc_offset_minutes
            ))
        })
}

/// Meeus' calendar-to-Julian-Day conversion for a date and decimal hours of UT.
pub fn calendar_to_julian_day(year: i32, month: u32, day: u32, hours: f64) -> JulianDay {
    let gregorian = (year, month, day) >= GREGORIAN_REFORM;

    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let (y, m) = (f64::from(y), f64::from(m));

    let mut jd = (365.25 * y).floor()
        + (30.6001 * (m + 1.0)).floor()
        + f64::from(day)
        + hours / 24.0
        + 1720994.5;

    if gregorian {
        let a = (y / 100.0).floor();
        jd += 2.0 - a + (a / 4.0).floor();
    }
    jd
}

pub fn date_to_julian_day(date_time: NaiveDateTime) -> JulianDay {
    let hours = date_time.hour() as f64
        + date_time.minute() as f64 / 60.0
        + date_time.second() as f64 / 3600.0;
    calendar_to_julian_day(date_time.year(), date_time.month(), date_time.day(), hours)
}

/// Fraction of the civil day elapsed since midnight UT.
pub fn day_fraction(jd: JulianDay) -> f64 {
    (jd + 0.5).rem_euclid(1.0)
}
