//! House strength scoring from occupancy, aspects and dignity.
//!
//! Every body scores its own house with its weight and aspects the seventh
//! house from it at half weight. Mars (4th/8th), Jupiter (5th/9th) and
//! Saturn (3rd/10th) add their special aspects at `weight / 2.5`.

use std::fmt;

use crate::{CelestialBody, House, PlanetPosition, ZodiacSign};

const PLANET_WEIGHTS: [(CelestialBody, f64); 9] = [
    (CelestialBody::Sun, 3.5),
    (CelestialBody::Moon, 4.0),
    (CelestialBody::Mercury, 3.5),
    (CelestialBody::Venus, 4.0),
    (CelestialBody::Mars, 3.0),
    (CelestialBody::Jupiter, 5.0),
    (CelestialBody::Saturn, 2.5),
    (CelestialBody::Rahu, 2.0),
    (CelestialBody::Ketu, 1.5),
];

static SPECIAL_ASPECTS: [(CelestialBody, [u8; 2]); 3] = [
    (CelestialBody::Mars, [4, 8]),
    (CelestialBody::Jupiter, [5, 9]),
    (CelestialBody::Saturn, [3, 10]),
];

/// (body, exaltation sign, debilitation sign)
const DIGNITY_SIGNS: [(CelestialBody, ZodiacSign, ZodiacSign); 9] = [
    (CelestialBody::Sun, ZodiacSign::Aries, ZodiacSign::Libra),
    (CelestialBody::Moon, ZodiacSign::Taurus, ZodiacSign::Scorpio),
    (CelestialBody::Mercury, ZodiacSign::Virgo, ZodiacSign::Pisces),
    (CelestialBody::Venus, ZodiacSign::Pisces, ZodiacSign::Virgo),
    (CelestialBody::Mars, ZodiacSign::Capricorn, ZodiacSign::Cancer),
    (CelestialBody::Jupiter, ZodiacSign::Cancer, ZodiacSign::Capricorn),
    (CelestialBody::Saturn, ZodiacSign::Libra, ZodiacSign::Aries),
    (CelestialBody::Rahu, ZodiacSign::Gemini, ZodiacSign::Sagittarius),
    (CelestialBody::Ketu, ZodiacSign::Sagittarius, ZodiacSign::Gemini),
];

const SEVENTH_ASPECT: f64 = 2.0;
const SPECIAL_ASPECT: f64 = 2.5;
const EXALTATION_BONUS: f64 = 0.5;
const DEBILITATION_PENALTY: f64 = 0.4;

pub fn planet_weight(body: CelestialBody) -> f64 {
    PLANET_WEIGHTS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, weight)| *weight)
        .unwrap_or(0.0)
}

/// Aspects beyond the seventh, as house counts from the occupied house.
pub fn special_aspects(body: CelestialBody) -> &'static [u8] {
    SPECIAL_ASPECTS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, aspects)| aspects.as_slice())
        .unwrap_or(&[])
}

pub fn exaltation_sign(body: CelestialBody) -> ZodiacSign {
    dignity_signs(body).0
}

pub fn debilitation_sign(body: CelestialBody) -> ZodiacSign {
    dignity_signs(body).1
}

fn dignity_signs(body: CelestialBody) -> (ZodiacSign, ZodiacSign) {
    DIGNITY_SIGNS
        .iter()
        .find(|(b, _, _)| *b == body)
        .map(|(_, exalted, debilitated)| (*exalted, *debilitated))
        .unwrap_or((ZodiacSign::Aries, ZodiacSign::Libra))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dignity {
    Exalted,
    OwnSign,
    Debilitated,
    Neutral,
}

impl Dignity {
    /// Exaltation takes precedence over debilitation, then own sign. The nodes
    /// rule no sign.
    pub fn of(body: CelestialBody, sign: ZodiacSign) -> Dignity {
        if sign == exaltation_sign(body) {
            Dignity::Exalted
        } else if sign == debilitation_sign(body) {
            Dignity::Debilitated
        } else if !body.is_node() && sign.ruler() == body {
            Dignity::OwnSign
        } else {
            Dignity::Neutral
        }
    }

    /// Multiple of the planet's weight added to its own house.
    pub fn score_factor(self) -> f64 {
        match self {
            Dignity::Exalted => EXALTATION_BONUS,
            Dignity::Debilitated => -DEBILITATION_PENALTY,
            Dignity::OwnSign | Dignity::Neutral => 0.0,
        }
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Dignity::Exalted => "exalted",
            Dignity::OwnSign => "in its own sign",
            Dignity::Debilitated => "debilitated",
            Dignity::Neutral => "neutral",
        };
        write!(f, "{}", label)
    }
}

/// Accumulated score per house.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HouseScores([f64; 12]);

impl HouseScores {
    pub fn get(&self, house: House) -> f64 {
        self.0[house.number() as usize - 1]
    }

    fn add(&mut self, house: House, amount: f64) {
        self.0[house.number() as usize - 1] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (House, f64)> + '_ {
        House::all().map(move |house| (house, self.get(house)))
    }

    /// Houses from strongest to weakest; equal scores keep house order.
    pub fn ranked(&self) -> Vec<House> {
        let mut houses: Vec<House> = House::all().collect();
        houses.sort_by(|a, b| self.get(*b).total_cmp(&self.get(*a)));
        houses
    }

    pub fn strengths(&self) -> HouseStrengths {
        let ranked = self.ranked();
        let n = ranked.len();
        HouseStrengths {
            strong: [ranked[0], ranked[1], ranked[2]],
            weak: [ranked[n - 1], ranked[n - 2], ranked[n - 3]],
        }
    }
}

/// Three strongest houses, strongest first, and three weakest, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseStrengths {
    pub strong: [House; 3],
    pub weak: [House; 3],
}

pub fn score_houses(planets: &[PlanetPosition]) -> HouseScores {
    let mut scores = HouseScores::default();

    for planet in planets {
        let body = planet.planet();
        let house = planet.house();
        let weight = planet_weight(body);

        scores.add(house, weight);
        scores.add(house.opposite(), weight / SEVENTH_ASPECT);
        for &nth in special_aspects(body) {
            scores.add(house.nth_from(nth), weight / SPECIAL_ASPECT);
        }
        scores.add(house, weight * planet.dignity().score_factor());
    }

    scores
}

pub fn house_strengths(planets: &[PlanetPosition]) -> HouseStrengths {
    score_houses(planets).strengths()
}
