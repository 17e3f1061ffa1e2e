// ABOUTME: Derived activity signal bundle and its guardrail-validated core record
// ABOUTME: Serializes with camelCase wire names for the downstream exchange contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Assembled signal bundle for one activity.
///
/// Produced by [`derive_signals`](crate::pipeline::derive_signals); the
/// movement flag rides alongside the core record, and only the core is
/// subject to guardrail validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySignals {
    /// The guardrail-validated signal record
    pub core: ActivitySignalsCore,
    /// Whether the activity involves physical geographic movement
    pub is_moving: bool,
}

/// The derived signal record enforced by
/// [`validate_signals`](crate::validation::validate_signals).
///
/// Enumerated fields carry raw strings at the boundary; validation is the
/// validating parse step against the closed vocabularies. `tags` and
/// `brands` are loosely typed JSON values because the output contract
/// requires the validator to detect non-string elements rather than make
/// them unrepresentable. Records are built fresh per activity and never
/// mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySignalsCore {
    /// Activity type code; required, must be non-empty to validate
    #[serde(default)]
    pub activity_type: String,
    /// Perceived effort, one of the [`Intensity`](super::Intensity) set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Terrain profile, one of the [`Elevation`](super::Elevation) set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<String>,
    /// Time of day, one of the [`TimeOfDay`](super::TimeOfDay) set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    /// Ordered free-form tags; every element must be a JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Value>>,
    /// Ordered topical signals extracted from title and description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_context: Option<Vec<String>>,
    /// Ordered brand mentions from gear metadata; every element must be a
    /// JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<Value>>,
}

impl ActivitySignalsCore {
    /// Create a core record with only the required activity type set
    #[must_use]
    pub fn new(activity_type: impl Into<String>) -> Self {
        Self {
            activity_type: activity_type.into(),
            ..Self::default()
        }
    }
}
