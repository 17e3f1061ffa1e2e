// ABOUTME: Fixed closed code lists for activity classification
// ABOUTME: Moving-activity codes matching the upstream provider vocabulary byte-for-byte
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Closed, case-sensitive code lists shared across the crate. These mirror
//! the upstream provider's activity vocabulary exactly and must never be
//! matched with trimming, case-folding, or substring logic.

/// Activity type codes that involve physical geographic movement.
///
/// Activities with these codes typically carry distance and pace metrics.
/// The list is a closed set over the provider's `type` / `sport_type`
/// vocabulary; membership is exact-match only. "Running" as a free-text
/// name is not `Run` the code, and treating near-misses as moving is more
/// costly than rejecting them.
pub const MOVING_ACTIVITY_CODES: &[&str] = &[
    // Running
    "Run",
    "TrailRun",
    "VirtualRun",
    // Cycling
    "Ride",
    "VirtualRide",
    "MountainBikeRide",
    "EBikeRide",
    // Water
    "Swim",
    "Surfing",
    "Canoeing",
    "Kayaking",
    // Winter
    "AlpineSki",
    "BackcountrySki",
    "NordicSki",
    "Snowboard",
    // Foot and climbing
    "Walk",
    "Hike",
    "RockClimbing",
    // Ball and racquet
    "Golf",
    "Soccer",
    "Tennis",
];
