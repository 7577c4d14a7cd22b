//! Capital city representation
//!
//! A Capital pairs a city with the country or U.S. state it belongs to,
//! along with map coordinates and a continent-level region tag.

use std::fmt;
use std::str::FromStr;

/// Continent-level region tags, plus the special US States mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    World,
    Americas,
    Europe,
    Asia,
    Africa,
    Oceania,
    UsStates,
}

impl Region {
    /// Every selectable region, in menu order
    pub const ALL: [Self; 7] = [
        Self::World,
        Self::Americas,
        Self::Europe,
        Self::Asia,
        Self::Africa,
        Self::Oceania,
        Self::UsStates,
    ];

    /// The display name, also used verbatim in seed keys and store keys
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::World => "World",
            Self::Americas => "Americas",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::Oceania => "Oceania",
            Self::UsStates => "US States",
        }
    }

    /// The region following this one in [`Region::ALL`], wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for unrecognized region names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionParseError(pub String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown region '{}' (expected one of: World, Americas, Europe, Asia, Africa, Oceania, US States)",
            self.0
        )
    }
}

impl std::error::Error for RegionParseError {}

impl FromStr for Region {
    type Err = RegionParseError;

    /// Parse a region from its display name, case-insensitively.
    ///
    /// Accepts `us-states` and `usstates` as aliases for the US States mode
    /// so the name survives shell quoting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "world" => Ok(Self::World),
            "americas" => Ok(Self::Americas),
            "europe" => Ok(Self::Europe),
            "asia" => Ok(Self::Asia),
            "africa" => Ok(Self::Africa),
            "oceania" => Ok(Self::Oceania),
            "us states" | "us-states" | "usstates" => Ok(Self::UsStates),
            _ => Err(RegionParseError(s.to_string())),
        }
    }
}

/// A capital city with its country or state, coordinates, and region tag
///
/// Immutable once loaded from the reference tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Capital {
    city: String,
    region_name: String,
    lat: f64,
    lng: f64,
    region: Region,
}

impl Capital {
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        region_name: impl Into<String>,
        lat: f64,
        lng: f64,
        region: Region,
    ) -> Self {
        Self {
            city: city.into(),
            region_name: region_name.into(),
            lat,
            lng,
            region,
        }
    }

    /// The capital city name, as displayed
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// The country (or U.S. state) name, as displayed
    #[inline]
    #[must_use]
    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    #[inline]
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    #[inline]
    #[must_use]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// City and country/state concatenated and case-folded, the membership
    /// target for letter guesses
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{}{}", self.city, self.region_name).to_lowercase()
    }
}

impl fmt::Display for Capital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.region_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_names_round_trip() {
        for region in Region::ALL {
            assert_eq!(region.name().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn region_parse_case_insensitive() {
        assert_eq!("europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!("WORLD".parse::<Region>().unwrap(), Region::World);
        assert_eq!("us states".parse::<Region>().unwrap(), Region::UsStates);
        assert_eq!("us-states".parse::<Region>().unwrap(), Region::UsStates);
    }

    #[test]
    fn region_parse_unknown() {
        let err = "Atlantis".parse::<Region>().unwrap_err();
        assert_eq!(err, RegionParseError("Atlantis".to_string()));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn region_next_cycles() {
        assert_eq!(Region::World.next(), Region::Americas);
        assert_eq!(Region::UsStates.next(), Region::World);

        let mut region = Region::World;
        for _ in 0..Region::ALL.len() {
            region = region.next();
        }
        assert_eq!(region, Region::World);
    }

    #[test]
    fn capital_full_text_lowercases() {
        let capital = Capital::new("Paris", "France", 48.8566, 2.3522, Region::Europe);
        assert_eq!(capital.full_text(), "parisfrance");
    }

    #[test]
    fn capital_full_text_keeps_punctuation() {
        let capital = Capital::new(
            "Washington, D.C.",
            "United States",
            38.9072,
            -77.0369,
            Region::Americas,
        );
        assert_eq!(capital.full_text(), "washington, d.c.united states");
    }

    #[test]
    fn capital_display() {
        let capital = Capital::new("Tokyo", "Japan", 35.6762, 139.6503, Region::Asia);
        assert_eq!(format!("{capital}"), "Tokyo, Japan");
    }
}
