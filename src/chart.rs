//! Chart input model
//!
//! `ChartData` is produced by the (external) calculation service and is
//! read-only to the engine. Field names follow the engine's JSON contract
//! (`absolutePosition`, `planetA`, `planetB`, `kind`) and also accept the
//! service's native spellings (`abs_pos`, `p1`, `p2`, `type`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ChartParseError, RenderError};
use crate::types::Degrees;

/// Number of house cusps in every chart wheel
pub const HOUSE_COUNT: usize = 12;

/// Identifier of a house cusp as delivered by the calculation service
/// (usually `1`..`12` or names like `"first_house"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HouseId {
    Number(u32),
    Name(String),
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HouseId::Number(n) => write!(f, "{}", n),
            HouseId::Name(s) => write!(f, "{}", s),
        }
    }
}

/// Identifier of a celestial body (`"sun"`, `"north_node"`, ...)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanetId(String);

impl PlanetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlanetId {
    fn from(s: &str) -> Self {
        PlanetId(s.to_string())
    }
}

impl From<String> for PlanetId {
    fn from(s: String) -> Self {
        PlanetId(s)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One house cusp
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    #[serde(rename = "absolutePosition", alias = "abs_pos", alias = "degree")]
    pub absolute_position: f64,
}

/// One body at its absolute ecliptic position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    #[serde(rename = "absolutePosition", alias = "abs_pos", alias = "degree")]
    pub absolute_position: f64,
}

/// Named angular relationship between two planets
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    SemiSextile,
    SemiSquare,
    Sesquiquadrate,
    Quintile,
    /// Anything the engine has no name for; kept verbatim
    Other(String),
}

impl AspectKind {
    pub fn name(&self) -> &str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
            AspectKind::Quincunx => "quincunx",
            AspectKind::SemiSextile => "semi-sextile",
            AspectKind::SemiSquare => "semi-square",
            AspectKind::Sesquiquadrate => "sesquiquadrate",
            AspectKind::Quintile => "quintile",
            AspectKind::Other(s) => s,
        }
    }
}

impl Default for AspectKind {
    fn default() -> Self {
        AspectKind::Other(String::new())
    }
}

impl FromStr for AspectKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Ok(match normalized.as_str() {
            "conjunction" | "conj" => AspectKind::Conjunction,
            "opposition" | "opp" => AspectKind::Opposition,
            "trine" | "tri" => AspectKind::Trine,
            "square" | "sqr" => AspectKind::Square,
            "sextile" | "sext" => AspectKind::Sextile,
            "quincunx" | "inconjunct" => AspectKind::Quincunx,
            "semisextile" => AspectKind::SemiSextile,
            "semisquare" => AspectKind::SemiSquare,
            "sesquiquadrate" | "sesquisquare" => AspectKind::Sesquiquadrate,
            "quintile" => AspectKind::Quintile,
            _ => AspectKind::Other(s.to_string()),
        })
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for AspectKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AspectKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let Ok(kind) = s.parse::<AspectKind>();
        Ok(kind)
    }
}

/// A relation between two planets, drawn as a line between their glyphs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    #[serde(rename = "planetA", alias = "p1")]
    pub planet_a: PlanetId,
    #[serde(rename = "planetB", alias = "p2")]
    pub planet_b: PlanetId,
    #[serde(default, alias = "type")]
    pub kind: AspectKind,
}

/// Everything the engine needs to draw one chart
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub houses: Vec<House>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

impl ChartData {
    /// Parse chart JSON, reporting failures with a labelled source span.
    pub fn from_json(source: &str) -> Result<ChartData, ChartParseError> {
        Self::from_json_named("<input>", source)
    }

    /// Like [`ChartData::from_json`], naming the source (e.g. a file path)
    /// in diagnostics.
    pub fn from_json_named(name: &str, source: &str) -> Result<ChartData, ChartParseError> {
        serde_json::from_str(source).map_err(|e| ChartParseError::from_json(name, source, e))
    }

    /// Check the fatal data-contract conditions: exactly 12 houses and
    /// finite degrees everywhere. Returns the normalized cusp and planet
    /// angles in input order.
    pub(crate) fn validate(&self) -> Result<ValidatedDegrees, RenderError> {
        if self.houses.len() != HOUSE_COUNT {
            crate::log::warn!(count = self.houses.len(), "rejecting malformed house set");
            return Err(RenderError::MalformedHouseSet {
                count: self.houses.len(),
            });
        }

        let houses = self
            .houses
            .iter()
            .map(|h| {
                Degrees::try_new(h.absolute_position).map_err(|reason| {
                    crate::log::warn!(house = %h.id, %reason, "rejecting non-finite degree");
                    RenderError::NonFiniteDegree {
                        subject: format!("house `{}`", h.id),
                        reason,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let planets = self
            .planets
            .iter()
            .map(|p| {
                Degrees::try_new(p.absolute_position).map_err(|reason| {
                    crate::log::warn!(planet = %p.id, %reason, "rejecting non-finite degree");
                    RenderError::NonFiniteDegree {
                        subject: format!("planet `{}`", p.id),
                        reason,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedDegrees { houses, planets })
    }
}

/// Normalized angles, index-aligned with `ChartData::houses` / `planets`
#[derive(Debug)]
pub(crate) struct ValidatedDegrees {
    pub houses: Vec<Degrees>,
    pub planets: Vec<Degrees>,
}
