// ABOUTME: Brand signal extraction from activity gear metadata
// ABOUTME: Combines gear name and nickname into one policy-filtered signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::trace;

use crate::capabilities::ContentPolicy;
use crate::models::Gear;

/// Derive brand mention signals from an activity's gear metadata.
///
/// The gear name and nickname are combined into a single space-separated
/// signal, trimmed at the ends. No signal is produced when the gear is
/// absent, when both fields are empty after trimming, or when the content
/// policy flags the combined text. The surviving signal is returned as the
/// sole element of the list; `None` means nothing survived.
#[must_use]
pub fn extract_brand_signals(
    gear: Option<&Gear>,
    policy: &dyn ContentPolicy,
) -> Option<Vec<String>> {
    let gear = gear?;
    if gear.name.is_empty() && gear.nickname.is_empty() {
        return None;
    }

    let signal = format!("{} {}", gear.name, gear.nickname)
        .trim()
        .to_owned();
    if signal.is_empty() {
        return None;
    }

    if policy.is_forbidden(&signal) {
        trace!("gear signal rejected by content policy");
        return None;
    }

    Some(vec![signal])
}
