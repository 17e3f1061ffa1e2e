// ABOUTME: Moving-activity classification over provider type codes
// ABOUTME: Exact-match membership test against the fixed moving-activity list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::MOVING_ACTIVITY_CODES;

/// Determine whether an activity represents physical geographic movement.
///
/// An activity is moving iff its `type` code or its `sport_type` code is
/// a member of [`MOVING_ACTIVITY_CODES`]; matching either field is
/// sufficient. Membership is byte-for-byte: no trimming, case-folding, or
/// substring logic, so `"run"`, `" Run "`, and `"Trail-Run"` all classify
/// as non-moving.
///
/// Pure and total over all string inputs.
#[must_use]
pub fn is_moving_activity(activity_type: &str, sport_type: &str) -> bool {
    MOVING_ACTIVITY_CODES.contains(&activity_type) || MOVING_ACTIVITY_CODES.contains(&sport_type)
}
