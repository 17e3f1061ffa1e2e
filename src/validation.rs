// ABOUTME: Guardrail validation for derived activity signal records
// ABOUTME: Accumulates every rule violation and produces a content-sanitized copy on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Signal Validation
//!
//! Enforces the output contract on an [`ActivitySignalsCore`] before it is
//! persisted or forwarded: enumerated fields must belong to their closed
//! vocabularies, list fields must contain only strings, and semantic
//! context must clear the content policy.
//!
//! Every rule is evaluated on every call — validation never short-circuits
//! on the first failure, so the caller always receives the complete
//! violation report. When the record fails, a best-effort sanitized copy
//! is produced with policy-flagged semantic-context entries removed;
//! shape violations are left in place, and callers intending to use the
//! sanitized copy must re-validate it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::ContentPolicy;
use crate::models::{ActivitySignalsCore, Elevation, Intensity, TimeOfDay};

/// Outcome of validating an [`ActivitySignalsCore`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalValidationResult {
    /// Whether every guardrail passed
    pub valid: bool,
    /// All accumulated violations, in rule order; empty iff `valid`
    pub errors: Vec<String>,
    /// Content-sanitized copy of the record, present only when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitized: Option<ActivitySignalsCore>,
}

impl SignalValidationResult {
    /// Create a passing result with no violations
    #[must_use]
    pub const fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            sanitized: None,
        }
    }

    /// Record a violation, flipping the verdict
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
        self.valid = false;
    }
}

impl Default for SignalValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a derived signal record against the output contract.
///
/// Checks, all independent:
///
/// 1. `activity_type` is non-empty
/// 2. a present `intensity` belongs to the [`Intensity`] vocabulary
/// 3. a present `elevation` belongs to the [`Elevation`] vocabulary
/// 4. a present `time_of_day` belongs to the [`TimeOfDay`] vocabulary
/// 5. every `tags` element is a string (one error regardless of count)
/// 6. no `semantic_context` entry is flagged by the content policy
/// 7. every `brands` element is a string (one error regardless of count)
///
/// The verdict is valid iff no rule recorded a violation. On failure the
/// result carries a sanitized copy: `semantic_context` filtered down to
/// entries the policy does not flag (order preserved), every other field
/// cloned unchanged even when it violated a shape rule. Sanitization
/// addresses content safety only and does not make the record valid.
#[must_use]
pub fn validate_signals(
    core: &ActivitySignalsCore,
    policy: &dyn ContentPolicy,
) -> SignalValidationResult {
    let mut result = SignalValidationResult::new();

    if core.activity_type.is_empty() {
        result.add_error("Activity type is required and must be a string".to_owned());
    }

    if let Some(intensity) = &core.intensity {
        if Intensity::parse(intensity).is_none() {
            result.add_error(format!(
                "Intensity must be one of: {}",
                Intensity::allowed_values()
            ));
        }
    }

    if let Some(elevation) = &core.elevation {
        if Elevation::parse(elevation).is_none() {
            result.add_error(format!(
                "Elevation must be one of: {}",
                Elevation::allowed_values()
            ));
        }
    }

    if let Some(time_of_day) = &core.time_of_day {
        if TimeOfDay::parse(time_of_day).is_none() {
            result.add_error(format!(
                "Time of day must be one of: {}",
                TimeOfDay::allowed_values()
            ));
        }
    }

    if let Some(tags) = &core.tags {
        if tags.iter().any(|tag| !tag.is_string()) {
            result.add_error("All tags must be strings".to_owned());
        }
    }

    if let Some(semantic_context) = &core.semantic_context {
        if semantic_context
            .iter()
            .any(|context| policy.is_forbidden(context))
        {
            result.add_error("Semantic context contains forbidden content".to_owned());
        }
    }

    if let Some(brands) = &core.brands {
        if brands.iter().any(|brand| !brand.is_string()) {
            result.add_error("All brands must be strings".to_owned());
        }
    }

    if !result.valid {
        debug!(
            error_count = result.errors.len(),
            "activity signals failed guardrail validation"
        );
        result.sanitized = Some(sanitize_semantic_context(core, policy));
    }

    result
}

/// Clone the record with policy-flagged semantic-context entries removed.
///
/// A present list whose entries are all flagged sanitizes to a present
/// empty list, not absence. Shape violations in other fields are left
/// untouched: content safety and shape validity are separate concerns.
fn sanitize_semantic_context(
    core: &ActivitySignalsCore,
    policy: &dyn ContentPolicy,
) -> ActivitySignalsCore {
    ActivitySignalsCore {
        semantic_context: core.semantic_context.as_ref().map(|entries| {
            entries
                .iter()
                .filter(|context| !policy.is_forbidden(context))
                .cloned()
                .collect()
        }),
        ..core.clone()
    }
}
