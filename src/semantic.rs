// ABOUTME: Semantic context extraction from activity title and description
// ABOUTME: Fans the injected text-signal extractor out over both sources in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::trace;

use crate::capabilities::{ContentPolicy, TextSignalExtractor};

/// Derive topical signals from an activity's user-entered text.
///
/// The extractor runs independently over the title and the description;
/// results are concatenated title-first, preserving each call's internal
/// ordering. Empty sources are skipped, and the extractor applies the
/// content policy internally, so no additional filtering happens here.
/// `None` means neither source produced a signal.
#[must_use]
pub fn extract_semantic_context(
    name: &str,
    description: &str,
    extractor: &dyn TextSignalExtractor,
    policy: &dyn ContentPolicy,
) -> Option<Vec<String>> {
    let mut semantic_context = Vec::new();

    if !name.is_empty() {
        if let Some(signals) = extractor.extract(name, policy) {
            semantic_context.extend(signals);
        }
    }

    if !description.is_empty() {
        if let Some(signals) = extractor.extract(description, policy) {
            semantic_context.extend(signals);
        }
    }

    if semantic_context.is_empty() {
        return None;
    }

    trace!(
        signal_count = semantic_context.len(),
        "extracted semantic context"
    );
    Some(semantic_context)
}
