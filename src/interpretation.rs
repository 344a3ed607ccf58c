//! Template-driven chart readings for the chat front end.
//!
//! Everything here is a pure function of the [`KundaliData`] it is given, so
//! the same chart and question always produce the same text.

use std::fmt;
use std::str::FromStr;

use crate::{CelestialBody, Dignity, House, KundaliData, PlanetPosition, ZodiacSign};

const NO_CHART: &str =
    "I don't have enough information about your birth chart to provide insights.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Career,
    Relationship,
    Health,
    Spiritual,
    Wealth,
    General,
}

impl Topic {
    /// Checked in this order; the first topic with a matching keyword wins.
    const DETECTION_ORDER: [Topic; 5] = [
        Topic::Career,
        Topic::Relationship,
        Topic::Health,
        Topic::Spiritual,
        Topic::Wealth,
    ];

    pub fn from_query(query: &str) -> Topic {
        let query = query.to_lowercase();
        Self::DETECTION_ORDER
            .iter()
            .copied()
            .find(|topic| topic.keywords().iter().any(|k| query.contains(k)))
            .unwrap_or(Topic::General)
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Career => &["career", "job", "profession", "work", "business"],
            Topic::Relationship => &["love", "relationship", "marriage", "partner", "romance"],
            Topic::Health => &["health", "medical", "wellness", "disease", "fitness"],
            Topic::Spiritual => &["spiritual", "meditation", "soul", "yoga", "dharma"],
            Topic::Wealth => &["money", "wealth", "finance", "investment", "income"],
            Topic::General => &[],
        }
    }

    pub fn relevant_houses(self) -> &'static [u8] {
        match self {
            Topic::Career => &[1, 2, 6, 10],
            Topic::Relationship => &[1, 5, 7, 8],
            Topic::Health => &[1, 6, 8, 12],
            Topic::Spiritual => &[4, 8, 9, 12],
            Topic::Wealth => &[1, 2, 5, 8, 9, 11],
            Topic::General => &[1, 4, 7, 10],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topic::Career => "career",
            Topic::Relationship => "relationship",
            Topic::Health => "health",
            Topic::Spiritual => "spiritual",
            Topic::Wealth => "wealth",
            Topic::General => "general",
        }
    }

    fn approach(self) -> &'static str {
        match self {
            Topic::Career => "natural approach to work",
            Topic::Relationship => "relationship style",
            Topic::Health => "physical constitution",
            Topic::Spiritual => "spiritual path",
            Topic::Wealth => "approach to finances",
            Topic::General => "basic nature",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            Topic::Career => "Your career path",
            Topic::Relationship => "Your relationships",
            Topic::Health => "Your health",
            Topic::Spiritual => "Your spiritual journey",
            Topic::Wealth => "Your financial situation",
            Topic::General => "Your life path",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Hinglish,
}

impl Language {
    fn prefix(self) -> &'static str {
        match self {
            Language::English => "",
            Language::Hindi => "हिंदी अनुवाद: ",
            Language::Hinglish => "Hinglish: ",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            "hinglish" => Ok(Language::Hinglish),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

// ---------------------------
// ## Keyword tables
// ---------------------------

pub fn planet_keywords(body: CelestialBody) -> &'static [&'static str] {
    match body {
        CelestialBody::Sun => &["self", "ego", "vitality", "leadership", "father", "authority"],
        CelestialBody::Moon => &["emotions", "mother", "nurturing", "home", "habits", "instincts"],
        CelestialBody::Mercury => &[
            "communication",
            "intellect",
            "learning",
            "siblings",
            "local travel",
        ],
        CelestialBody::Venus => &["love", "relationships", "beauty", "arts", "values", "pleasure"],
        CelestialBody::Mars => &["energy", "action", "passion", "drive", "courage"],
        CelestialBody::Jupiter => &[
            "expansion",
            "luck",
            "philosophy",
            "higher learning",
            "abundance",
        ],
        CelestialBody::Saturn => &[
            "discipline",
            "responsibility",
            "limitations",
            "structure",
            "karma",
        ],
        CelestialBody::Rahu => &["obsession", "desire", "illusion", "innovation", "amplification"],
        CelestialBody::Ketu => &[
            "spirituality",
            "liberation",
            "past life",
            "detachment",
            "intuition",
        ],
    }
}

pub fn house_keywords(house: House) -> &'static [&'static str] {
    match house {
        House::First => &["self", "physical body", "personality", "appearance"],
        House::Second => &["possessions", "values", "wealth", "speech", "family"],
        House::Third => &["communication", "siblings", "neighbors", "short journeys"],
        House::Fourth => &["home", "mother", "real estate", "emotional foundation"],
        House::Fifth => &["creativity", "romance", "children", "pleasure"],
        House::Sixth => &["health", "daily routine", "service", "work"],
        House::Seventh => &["partnerships", "marriage", "contracts", "open enemies"],
        House::Eighth => &["transformation", "joint resources", "sexuality", "occult"],
        House::Ninth => &["higher education", "philosophy", "long-distance travel", "spirituality"],
        House::Tenth => &["career", "reputation", "public image", "authority"],
        House::Eleventh => &["friends", "groups", "hopes", "wishes"],
        House::Twelfth => &["spirituality", "isolation", "hidden enemies", "subconscious"],
    }
}

pub fn sign_keywords(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aries => &["initiative", "courage", "impulsive", "leadership"],
        ZodiacSign::Taurus => &["stability", "sensuality", "patience", "determination"],
        ZodiacSign::Gemini => &["communication", "versatility", "curiosity", "adaptability"],
        ZodiacSign::Cancer => &["nurturing", "emotional", "protective", "intuitive"],
        ZodiacSign::Leo => &["creative", "proud", "theatrical", "warm-hearted"],
        ZodiacSign::Virgo => &["analytical", "practical", "detailed", "perfectionist"],
        ZodiacSign::Libra => &["diplomatic", "harmonious", "partnership-oriented", "fair"],
        ZodiacSign::Scorpio => &["intense", "passionate", "secretive", "transformative"],
        ZodiacSign::Sagittarius => {
            &["philosophical", "adventurous", "optimistic", "freedom-loving"]
        }
        ZodiacSign::Capricorn => &["ambitious", "disciplined", "responsible", "cautious"],
        ZodiacSign::Aquarius => &["innovative", "humanitarian", "independent", "intellectual"],
        ZodiacSign::Pisces => &["compassionate", "intuitive", "spiritual", "imaginative"],
    }
}

fn body_parts(ascendant: ZodiacSign) -> &'static str {
    match ascendant {
        ZodiacSign::Aries => "head, brain, and adrenal system",
        ZodiacSign::Taurus => "throat, neck and thyroid",
        ZodiacSign::Gemini => "lungs, shoulders, arms and nervous system",
        ZodiacSign::Cancer => "stomach, breasts and digestive system",
        ZodiacSign::Leo => "heart, spine and circulation",
        ZodiacSign::Virgo => "intestines, digestive system and assimilation",
        ZodiacSign::Libra => "kidneys, lower back and adrenals",
        ZodiacSign::Scorpio => "reproductive and elimination systems",
        ZodiacSign::Sagittarius => "hips, thighs and liver",
        ZodiacSign::Capricorn => "bones, joints and skin",
        ZodiacSign::Aquarius => "circulation, ankles and electrical system",
        ZodiacSign::Pisces => "feet, lymphatic system and pineal gland",
    }
}

fn dignity_phrase(dignity: Dignity) -> &'static str {
    match dignity {
        Dignity::Exalted => "strongly positive",
        Dignity::OwnSign => "well-placed",
        Dignity::Debilitated => "difficult",
        Dignity::Neutral => "neutral",
    }
}

// ---------------------------
// ## Helpers
// ---------------------------

fn first(words: &[&str], n: usize) -> Vec<String> {
    words.iter().take(n).map(|w| w.to_string()).collect()
}

/// `a`, `a and b`, `a, b and c`.
fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn ordinal(house: House) -> String {
    let n = house.number();
    let suffix = match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn names(planets: &[&PlanetPosition]) -> Vec<String> {
    planets.iter().map(|p| p.planet().to_string()).collect()
}

fn in_houses<'a>(chart: &'a KundaliData, houses: &[u8]) -> Vec<&'a PlanetPosition> {
    chart
        .planets
        .iter()
        .filter(|p| houses.contains(&p.house().number()))
        .collect()
}

fn is_own_sign(position: &PlanetPosition) -> bool {
    !position.planet().is_node() && position.sign().ruler() == position.planet()
}

/// Planet with the highest prominence score; ties go to the earlier planet.
pub fn dominant_planet(chart: &KundaliData) -> Option<CelestialBody> {
    let ascendant_lord = chart.ascendant_sign().map(ZodiacSign::ruler);

    let score = |position: &PlanetPosition| -> u32 {
        let body = position.planet();
        let house = position.house();
        let mut score = 0;
        if chart.strong_houses.contains(&house) {
            score += 3;
        }
        if matches!(body, CelestialBody::Sun | CelestialBody::Moon | CelestialBody::Jupiter) {
            score += 2;
        }
        if is_own_sign(position) {
            score += 3;
        }
        if ascendant_lord == Some(body) {
            score += 3;
        }
        match house {
            House::First | House::Tenth => score += 2,
            House::Fifth | House::Ninth => score += 1,
            _ => {}
        }
        score
    };

    let mut best: Option<(CelestialBody, u32)> = None;
    for position in &chart.planets {
        let s = score(position);
        if s > best.map_or(0, |(_, top)| top) {
            best = Some((position.planet(), s));
        }
    }
    best.map(|(body, _)| body)
}

// ---------------------------
// ## Topic paragraphs
// ---------------------------

fn career_paragraph(chart: &KundaliData) -> String {
    let mut text = String::new();
    let tenth = in_houses(chart, &[10]);
    if !tenth.is_empty() {
        let themes: Vec<String> = tenth
            .iter()
            .flat_map(|p| first(planet_keywords(p.planet()), 2))
            .collect();
        text.push_str(&format!(
            "With {} in your 10th house, you may excel in careers involving {}. ",
            names(&tenth).join(" and "),
            themes.join(", ")
        ));
    } else if let Some(ruler) = chart
        .planets
        .iter()
        .find(|p| matches!(p.planet(), CelestialBody::Saturn | CelestialBody::Sun))
    {
        text.push_str(&format!(
            "Your career may be influenced by qualities of {}, suggesting talents in {}. ",
            ruler.sign(),
            first(sign_keywords(ruler.sign()), 2).join(" and ")
        ));
    }

    if let Some(saturn) = chart.planet(CelestialBody::Saturn) {
        let (place, meaning) = match saturn.house() {
            House::Tenth => (
                "10th house of career".to_string(),
                "a structured career with potential for authority and long-term achievement",
            ),
            House::First => (
                "1st house".to_string(),
                "you work hard for your achievements and may face early career challenges",
            ),
            House::Seventh => (
                "7th house".to_string(),
                "business partnerships may be significant in your professional life",
            ),
            house => (
                format!("{} house", ordinal(house)),
                "discipline and perseverance are important factors in your career development",
            ),
        };
        text.push_str(&format!("Saturn in your {} suggests {}. ", place, meaning));
    }
    text
}

fn relationship_paragraph(chart: &KundaliData) -> String {
    let mut text = String::new();
    let venus = chart.planet(CelestialBody::Venus);
    let mars = chart.planet(CelestialBody::Mars);

    if let Some(venus) = venus {
        use ZodiacSign::*;
        let style = match venus.sign() {
            Taurus | Libra => "approach relationships with natural harmony and attraction",
            Aries | Scorpio => "seek passion and intensity in relationships",
            Gemini | Aquarius => "value intellectual connection in partnerships",
            Cancer | Pisces => "seek emotional depth and nurturing bonds",
            _ => "balance practical concerns with romantic ideals",
        };
        text.push_str(&format!(
            "Venus in {} and house {} suggests you {}. ",
            venus.sign(),
            venus.house(),
            style
        ));
    }

    if let (Some(venus), Some(mars)) = (venus, mars) {
        let tone = if venus.sign() == mars.sign() {
            "harmony between your romantic desires and actions"
        } else {
            "potential creative tension between what you value and how you pursue it"
        };
        text.push_str(&format!("The relationship between your Venus and Mars shows {}. ", tone));
    }

    if let Some(moon) = chart.planet(CelestialBody::Moon) {
        text.push_str(&format!(
            "Your emotional needs in relationships are shaped by Moon in {}, \
             making you {} in matters of the heart. ",
            moon.sign(),
            first(sign_keywords(moon.sign()), 2).join(" and ")
        ));
    }
    text
}

fn health_paragraph(chart: &KundaliData) -> String {
    let mut text = String::new();
    if let Some(ascendant) = chart.ascendant_sign() {
        text.push_str(&format!(
            "Your {} ascendant suggests attention to {}. ",
            ascendant,
            body_parts(ascendant)
        ));
    }

    let sixth = in_houses(chart, &[6]);
    if !sixth.is_empty() {
        let has = |body: CelestialBody| sixth.iter().any(|p| p.planet() == body);
        let outlook = if has(CelestialBody::Saturn) {
            "potential for chronic issues requiring long-term management"
        } else if has(CelestialBody::Jupiter) {
            "generally good vitality but potential for excess"
        } else if has(CelestialBody::Mars) {
            "dynamic energy but potential for inflammation or injuries"
        } else {
            "attention to daily health habits is important for your wellbeing"
        };
        text.push_str(&format!(
            "Planets in your 6th house of health ({}) suggest {}. ",
            names(&sixth).join(", "),
            outlook
        ));
    }
    text
}

fn spiritual_paragraph(chart: &KundaliData) -> String {
    let mut text = String::new();
    let seekers = in_houses(chart, &[9, 12]);
    if let Some(lead) = seekers.first() {
        let realm = if lead.house() == House::Ninth {
            "house of philosophy and higher understanding"
        } else {
            "house of mysticism and transcendence"
        };
        text.push_str(&format!(
            "Your spiritual nature is highlighted by {} in the {}. ",
            names(&seekers).join(" and "),
            realm
        ));
    }

    if let Some(ketu) = chart.planet(CelestialBody::Ketu) {
        let gift = match ketu.house() {
            House::Twelfth => "deep spiritual gifts from past lives",
            House::Ninth => "innate spiritual wisdom requiring less formal religious structure",
            House::Third => "intuitive knowledge that transcends intellectual learning",
            _ => "areas where spiritual detachment helps your evolution",
        };
        text.push_str(&format!(
            "Ketu in your {} house points to {}. ",
            ordinal(ketu.house()),
            gift
        ));
    }

    if let Some(jupiter) = chart.planet(CelestialBody::Jupiter) {
        use ZodiacSign::*;
        let path = match jupiter.sign() {
            Sagittarius | Pisces => "natural connection to higher wisdom",
            Cancer | Scorpio => "emotional depth and transformative experiences",
            Aries | Leo => "inspired leadership and creative expression",
            _ => "structured learning and practical application of wisdom",
        };
        text.push_str(&format!(
            "Jupiter in {} guides your spiritual expansion through {}. ",
            jupiter.sign(),
            path
        ));
    }
    text
}

fn wealth_paragraph(chart: &KundaliData) -> String {
    let mut text = String::new();
    let second = in_houses(chart, &[2]);
    if !second.is_empty() {
        let has = |body: CelestialBody| second.iter().any(|p| p.planet() == body);
        let outlook = if has(CelestialBody::Jupiter) {
            "potential for abundance and financial expansion".to_string()
        } else if has(CelestialBody::Venus) {
            "appreciation for quality and ability to attract resources".to_string()
        } else if has(CelestialBody::Saturn) {
            "disciplined approach to building steady wealth over time".to_string()
        } else {
            let themes: Vec<String> = second
                .iter()
                .flat_map(|p| first(planet_keywords(p.planet()), 1))
                .collect();
            format!("your personal resources are tied to {}", themes.join(" and "))
        };
        text.push_str(&format!(
            "Your approach to wealth is influenced by {} in the 2nd house, suggesting {}. ",
            names(&second).join(" and "),
            outlook
        ));
    }

    if let Some(jupiter) = chart.planet(CelestialBody::Jupiter) {
        let channel = match jupiter.house() {
            House::First => "personal initiatives and self-development".to_string(),
            House::Second => "steady accumulation of assets and resources".to_string(),
            House::Fifth => "creative ventures, investments or speculative activities".to_string(),
            House::Ninth => "higher education, publishing or international connections".to_string(),
            House::Tenth => "career advancement and professional recognition".to_string(),
            House::Eleventh => "networks, groups and social connections".to_string(),
            house => first(house_keywords(house), 2).join(" and "),
        };
        text.push_str(&format!(
            "Jupiter in your {} house suggests financial opportunities through {}. ",
            ordinal(jupiter.house()),
            channel
        ));
    }
    text
}

fn general_paragraph(chart: &KundaliData) -> String {
    let mut text = String::new();
    let dasha_lord = chart
        .current_dasha
        .split_whitespace()
        .next()
        .and_then(|name| name.parse::<CelestialBody>().ok());
    if let Some(lord) = dasha_lord {
        text.push_str(&format!(
            "Your current {} brings focus to qualities of {}: {}. ",
            chart.current_dasha,
            lord,
            first(planet_keywords(lord), 3).join(", ")
        ));
    }

    let strong: Vec<String> = chart.strong_houses.iter().map(House::to_string).collect();
    text.push_str(&format!(
        "Your chart shows strengths in houses {}, highlighting areas of {}. ",
        strong.join(", "),
        strong_house_themes(chart)
    ));

    let sun = chart.planet(CelestialBody::Sun);
    if let (Some(sun), Some(moon_sign)) = (sun, chart.moon_sign_name()) {
        text.push_str(&format!(
            "With Sun in {} and Moon in {}, you balance {} with {} qualities. ",
            sun.sign(),
            moon_sign,
            sign_keywords(sun.sign())[0],
            sign_keywords(moon_sign)[0]
        ));
    }
    text
}

fn strong_house_themes(chart: &KundaliData) -> String {
    chart
        .strong_houses
        .iter()
        .flat_map(|house| first(house_keywords(*house), 1))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------
// ## Entry points
// ---------------------------

/// Reading of `chart` for one topic.
pub fn generate_insight(topic: Topic, chart: &KundaliData) -> String {
    if chart.planets.is_empty() {
        return NO_CHART.to_string();
    }

    let mut text = String::new();

    if let Some(ascendant) = chart.ascendant_sign() {
        text.push_str(&format!(
            "With {} ascendant, your {} tends to be {}. ",
            ascendant,
            topic.approach(),
            first(sign_keywords(ascendant), 3).join(", ")
        ));
    }

    if let Some(body) = dominant_planet(chart) {
        if let Some(position) = chart.planet(body) {
            text.push_str(&format!(
                "Your chart is strongly influenced by {} in {}, \
                 which brings qualities of {} to your {} matters. ",
                body,
                position.sign(),
                first(planet_keywords(body), 3).join(", "),
                topic
            ));
        }
    }

    let relevant = in_houses(chart, topic.relevant_houses());
    if !relevant.is_empty() {
        let placements: Vec<String> = relevant
            .iter()
            .map(|p| {
                format!(
                    "{} in {} ({}) in house {}",
                    p.planet(),
                    p.sign(),
                    dignity_phrase(p.dignity()),
                    p.house()
                )
            })
            .collect();
        text.push_str(&format!(
            "{} is particularly influenced by {}. ",
            topic.subject(),
            join_with_and(&placements)
        ));
    }

    text.push_str(&match topic {
        Topic::Career => career_paragraph(chart),
        Topic::Relationship => relationship_paragraph(chart),
        Topic::Health => health_paragraph(chart),
        Topic::Spiritual => spiritual_paragraph(chart),
        Topic::Wealth => wealth_paragraph(chart),
        Topic::General => general_paragraph(chart),
    });

    text.push_str(&format!(
        "Overall, your chart suggests particular strength in matters of {}, \
         which can be channeled positively into your {} development.",
        strong_house_themes(chart),
        topic
    ));

    text
}

/// Answers a free-text question: detects the topic, then renders the insight
/// with the language marker in front.
pub fn generate_response(query: &str, chart: &KundaliData, language: Language) -> String {
    let topic = Topic::from_query(query);
    format!("{}{}", language.prefix(), generate_insight(topic, chart))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_detection() {
        assert_eq!(Topic::from_query("How will my CAREER go?"), Topic::Career);
        assert_eq!(Topic::from_query("When will I find a partner"), Topic::Relationship);
        assert_eq!(Topic::from_query("any disease risk"), Topic::Health);
        assert_eq!(Topic::from_query("should I practice yoga"), Topic::Spiritual);
        assert_eq!(Topic::from_query("investment advice"), Topic::Wealth);
        assert_eq!(Topic::from_query("tell me about myself"), Topic::General);
        // career keywords are checked first
        assert_eq!(Topic::from_query("business partner"), Topic::Career);
    }

    #[test]
    fn language_parsing() {
        assert_eq!("Hindi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!("hinglish".parse::<Language>(), Ok(Language::Hinglish));
        assert_eq!(Language::default(), Language::English);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn list_joining() {
        let items: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_with_and(&items[..1]), "a");
        assert_eq!(join_with_and(&items[..2]), "a and b");
        assert_eq!(join_with_and(&items), "a, b and c");
        assert_eq!(ordinal(House::Second), "2nd");
        assert_eq!(ordinal(House::Eleventh), "11th");
    }

    #[test]
    fn dominant_planet_of_fallback_chart() {
        assert_eq!(dominant_planet(&KundaliData::fallback()), Some(CelestialBody::Mars));
    }

    #[test]
    fn general_reading_of_fallback_chart() {
        let text = generate_insight(Topic::General, &KundaliData::fallback());
        assert!(text.starts_with(
            "With Leo ascendant, your basic nature tends to be creative, proud, theatrical. "
        ));
        assert!(text.contains(
            "Your chart is strongly influenced by Mars in Aries, which brings qualities of \
             energy, action, passion to your general matters. "
        ));
        assert!(text.contains(
            "Your life path is particularly influenced by Moon in Taurus (strongly positive) \
             in house 10 and Venus in Taurus (well-placed) in house 10. "
        ));
        assert!(text.contains(
            "Your current Jupiter Mahadasha (2020-2036) brings focus to qualities of Jupiter: \
             expansion, luck, philosophy. "
        ));
        assert!(text.contains(
            "With Sun in Gemini and Moon in Taurus, you balance communication with stability \
             qualities. "
        ));
        assert!(text.ends_with(
            "Overall, your chart suggests particular strength in matters of self, creativity, \
             higher education, which can be channeled positively into your general development."
        ));
    }

    #[test]
    fn topic_paragraphs_reference_the_chart() {
        let chart = KundaliData::fallback();
        let career = generate_insight(Topic::Career, &chart);
        assert!(career.contains(
            "With Moon and Venus in your 10th house, you may excel in careers involving \
             emotions, mother, love, relationships. "
        ));
        assert!(career.contains("Saturn in your 6th house suggests discipline and perseverance"));

        let health = generate_insight(Topic::Health, &chart);
        assert!(health
            .contains("Your Leo ascendant suggests attention to heart, spine and circulation. "));
        assert!(health.contains(
            "Planets in your 6th house of health (Saturn) suggest potential for chronic issues"
        ));

        let spiritual = generate_insight(Topic::Spiritual, &chart);
        assert!(spiritual.contains(
            "Your spiritual nature is highlighted by Mars in the house of philosophy and \
             higher understanding. "
        ));
        assert!(spiritual.contains(
            "Jupiter in Pisces guides your spiritual expansion through natural connection to \
             higher wisdom. "
        ));

        let wealth = generate_insight(Topic::Wealth, &chart);
        assert!(wealth.contains(
            "Jupiter in your 8th house suggests financial opportunities through transformation \
             and joint resources. "
        ));

        let love = generate_insight(Topic::Relationship, &chart);
        assert!(love.contains(
            "Venus in Taurus and house 10 suggests you approach relationships with natural \
             harmony and attraction. "
        ));
    }

    #[test]
    fn empty_chart_has_no_reading() {
        let mut chart = KundaliData::fallback();
        chart.planets.clear();
        assert_eq!(generate_insight(Topic::Career, &chart), NO_CHART);
    }

    #[test]
    fn responses_carry_language_marker() {
        let chart = KundaliData::fallback();
        let english = generate_response("my career", &chart, Language::English);
        assert_eq!(english, generate_insight(Topic::Career, &chart));
        let hindi = generate_response("my career", &chart, Language::Hindi);
        assert_eq!(hindi, format!("हिंदी अनुवाद: {}", english));
        let hinglish = generate_response("my career", &chart, Language::Hinglish);
        assert!(hinglish.starts_with("Hinglish: With Leo ascendant"));
    }

    #[test]
    fn readings_are_deterministic() {
        let chart = KundaliData::fallback();
        for topic in [Topic::Career, Topic::Wealth, Topic::General] {
            assert_eq!(generate_insight(topic, &chart), generate_insight(topic, &chart));
        }
    }
}
