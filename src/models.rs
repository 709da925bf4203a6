use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Stored record shapes, field names as written by the admin tool.
/// Every field defaults so a partial record still renders, with the
/// missing pieces blank.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Match {
    pub homeTeam: String,
    pub awayTeam: String,
    pub date: String,
    pub time: String,
    pub homeLogo: Option<String>,
    pub awayLogo: Option<String>,
}

impl Match {
    /// Combined date+time instant used for chronological ordering.
    /// None when either part fails to parse.
    pub fn start_instant(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&self.time, "%H:%M:%S"))
            .ok()?;
        Some(date.and_time(time))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Team {
    pub name: String,
    pub logo: Option<String>,

    pub pj: u16,
    pub g: u16,
    pub e: u16,
    pub p: u16,
    pub gf: u16,
    pub gc: u16,
    pub dg: i16,
    pub pts: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Scorer {
    pub name: String,
    pub team: String,
    pub goals: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Partidos,
    Posiciones,
    Goleadores,
}

impl Section {
    pub fn get_all() -> Vec<Section> {
        vec![Section::Partidos, Section::Posiciones, Section::Goleadores]
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            Section::Partidos => "Partidos",
            Section::Posiciones => "Posiciones",
            Section::Goleadores => "Goleadores",
        }
    }
}

impl FromStr for Section {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partidos" => Ok(Section::Partidos),
            "posiciones" => Ok(Section::Posiciones),
            "goleadores" => Ok(Section::Goleadores),
            _ => Err(ParseStringError)
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Partidos => write!(f, "partidos"),
            Section::Posiciones => write!(f, "posiciones"),
            Section::Goleadores => write!(f, "goleadores"),
        }
    }
}

/// Keys in the site store. The names are the ones the admin tool has
/// always written under, so they stay as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Matches,
    Teams,
    Scorers,
    Logo,
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::Matches => write!(f, "ligaMFMMatches"),
            StoreKey::Teams => write!(f, "ligaMFMTeams"),
            StoreKey::Scorers => write!(f, "ligaMFMScorers"),
            StoreKey::Logo => write!(f, "ligaMFMLogo"),
        }
    }
}

impl FromStr for StoreKey {
    type Err = ParseStringError;

    // Only the three collection keys are addressable from the outside
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matches" => Ok(StoreKey::Matches),
            "teams" => Ok(StoreKey::Teams),
            "scorers" => Ok(StoreKey::Scorers),
            _ => Err(ParseStringError)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;
