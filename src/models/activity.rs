// ABOUTME: Provider-shaped input view of a fitness activity record
// ABOUTME: Title, description, classification codes, and optional gear metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Read-only view of a source activity record, shaped after the provider
/// activity payload.
///
/// Only the fields the signal pipeline reads are modeled. Missing fields
/// deserialize to their empty defaults so partial provider payloads remain
/// acceptable input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceActivity {
    /// Activity title as entered by the athlete (may be empty)
    #[serde(default)]
    pub name: String,
    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Legacy activity classification code, case-sensitive (e.g. `Run`)
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Sport classification code, case-sensitive (e.g. `TrailRun`)
    #[serde(default)]
    pub sport_type: String,
    /// Equipment metadata, absent when no gear is attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear: Option<Gear>,
}

/// Equipment metadata attached to an activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    /// Gear name from the provider catalog (may be empty)
    #[serde(default)]
    pub name: String,
    /// Athlete-assigned nickname (may be empty)
    #[serde(default)]
    pub nickname: String,
}
