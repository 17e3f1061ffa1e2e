// ABOUTME: Signal derivation pipeline composing classifier and extractors
// ABOUTME: Builds an ActivitySignals bundle from one provider activity record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use tracing::debug;

use crate::brands::extract_brand_signals;
use crate::capabilities::{ContentPolicy, TextSignalExtractor};
use crate::classification::is_moving_activity;
use crate::models::{ActivitySignals, ActivitySignalsCore, SourceActivity};
use crate::semantic::extract_semantic_context;

/// Derive the full signal bundle for one activity record.
///
/// Runs the moving-activity classifier and both signal extractors, then
/// assembles the core record. The core's `activity_type` is the
/// `sport_type` code when present, falling back to the legacy `type`
/// code. Enrichment fields (`intensity`, `elevation`, `time_of_day`,
/// `tags`) start absent; later stages outside this crate fill them in.
///
/// The bundle is not yet validated — callers pass `bundle.core` through
/// [`validate_signals`](crate::validation::validate_signals) before
/// persisting or forwarding it.
#[must_use]
pub fn derive_signals(
    activity: &SourceActivity,
    extractor: &dyn TextSignalExtractor,
    policy: &dyn ContentPolicy,
) -> ActivitySignals {
    let is_moving = is_moving_activity(&activity.activity_type, &activity.sport_type);

    let activity_type = if activity.sport_type.is_empty() {
        activity.activity_type.clone()
    } else {
        activity.sport_type.clone()
    };

    let semantic_context =
        extract_semantic_context(&activity.name, &activity.description, extractor, policy);

    let brands = extract_brand_signals(activity.gear.as_ref(), policy)
        .map(|signals| signals.into_iter().map(Value::String).collect());

    debug!(
        activity_type = %activity_type,
        is_moving,
        "derived activity signals"
    );

    ActivitySignals {
        core: ActivitySignalsCore {
            activity_type,
            semantic_context,
            brands,
            ..ActivitySignalsCore::default()
        },
        is_moving,
    }
}
