// ABOUTME: Closed vocabularies for enumerated signal fields
// ABOUTME: Intensity, elevation, and time-of-day sum types with validating parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a raw string does not belong to a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{value:?} is not in the {vocabulary} vocabulary")]
pub struct ParseVocabularyError {
    /// Name of the vocabulary the value was checked against
    pub vocabulary: &'static str,
    /// The rejected raw value
    pub value: String,
}

/// Perceived effort classification for an activity
///
/// The signal record carries this as a raw string at the boundary;
/// validation converts with [`Intensity::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Easy/recovery effort
    Low,
    /// Steady aerobic effort
    Medium,
    /// Hard or race effort
    High,
}

impl Intensity {
    /// Every member of the closed set, in contract order
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse from the exact wire string, `None` for anything outside the set
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Comma-separated allowed values, as surfaced in validation errors
    #[must_use]
    pub fn allowed_values() -> String {
        join_allowed(Self::ALL.iter().map(Self::as_str))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseVocabularyError {
            vocabulary: "intensity",
            value: s.to_owned(),
        })
    }
}

/// Terrain profile classification for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Elevation {
    /// Negligible elevation change
    Flat,
    /// Rolling hills
    Rolling,
    /// Sustained climbing
    Mountainous,
}

impl Elevation {
    /// Every member of the closed set, in contract order
    pub const ALL: [Self; 3] = [Self::Flat, Self::Rolling, Self::Mountainous];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Rolling => "rolling",
            Self::Mountainous => "mountainous",
        }
    }

    /// Parse from the exact wire string, `None` for anything outside the set
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(Self::Flat),
            "rolling" => Some(Self::Rolling),
            "mountainous" => Some(Self::Mountainous),
            _ => None,
        }
    }

    /// Comma-separated allowed values, as surfaced in validation errors
    #[must_use]
    pub fn allowed_values() -> String {
        join_allowed(Self::ALL.iter().map(Self::as_str))
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Elevation {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseVocabularyError {
            vocabulary: "elevation",
            value: s.to_owned(),
        })
    }
}

/// Time-of-day classification for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Early hours before the workday
    Morning,
    /// Midday
    Day,
    /// After the workday
    Evening,
    /// Late hours
    Night,
}

impl TimeOfDay {
    /// Every member of the closed set, in contract order
    pub const ALL: [Self; 4] = [Self::Morning, Self::Day, Self::Evening, Self::Night];

    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Parse from the exact wire string, `None` for anything outside the set
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(Self::Morning),
            "day" => Some(Self::Day),
            "evening" => Some(Self::Evening),
            "night" => Some(Self::Night),
            _ => None,
        }
    }

    /// Comma-separated allowed values, as surfaced in validation errors
    #[must_use]
    pub fn allowed_values() -> String {
        join_allowed(Self::ALL.iter().map(Self::as_str))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseVocabularyError {
            vocabulary: "time of day",
            value: s.to_owned(),
        })
    }
}

fn join_allowed<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(", ")
}
