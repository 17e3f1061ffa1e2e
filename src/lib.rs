// ABOUTME: Activity signal derivation and guardrail validation library
// ABOUTME: Pure transforms from provider activity records to validated signal bundles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Signals
//!
//! Signal derivation and guardrail validation for fitness activity records.
//! Given a provider activity (title, description, type codes, gear), this
//! crate derives a structured signal bundle — movement classification,
//! semantic context from free text, brand mentions from gear metadata —
//! and validates that bundle against fixed vocabularies and content-safety
//! rules before it is persisted or forwarded downstream.
//!
//! Every transform is a pure, synchronous function over small records:
//! no I/O, no shared mutable state, safe to call concurrently without
//! coordination. External capabilities (the forbidden-content policy and
//! the free-text signal extractor) are injected as explicit arguments,
//! never resolved from globals.
//!
//! ## Modules
//!
//! - **models**: `SourceActivity` input view, `ActivitySignals` bundle,
//!   closed vocabularies (`Intensity`, `Elevation`, `TimeOfDay`)
//! - **capabilities**: injected capability traits (`ContentPolicy`,
//!   `TextSignalExtractor`)
//! - **classification**: moving-activity classifier
//! - **brands** / **semantic**: signal extractors
//! - **validation**: guardrail enforcement with error accumulation
//! - **pipeline**: `derive_signals` composition entry point
//!
//! ## Example
//!
//! ```rust
//! use pierre_signals::models::{Gear, SourceActivity};
//! use pierre_signals::{derive_signals, validate_signals, ContentPolicy};
//!
//! let activity = SourceActivity {
//!     name: "Morning tempo run".into(),
//!     description: "Felt strong on the hills".into(),
//!     activity_type: "Run".into(),
//!     sport_type: "TrailRun".into(),
//!     gear: Some(Gear {
//!         name: "Pegasus 40".into(),
//!         nickname: "daily trainer".into(),
//!     }),
//! };
//!
//! let policy = |_: &str| false;
//! let extractor =
//!     |text: &str, _: &dyn ContentPolicy| Some(vec![text.to_owned()]);
//!
//! let signals = derive_signals(&activity, &extractor, &policy);
//! let result = validate_signals(&signals.core, &policy);
//! assert!(result.valid);
//! ```

/// Injected capability traits for content safety and text-signal extraction
pub mod capabilities;

/// Moving-activity classification against the fixed code list
pub mod classification;

/// Fixed closed code lists shared across the crate
pub mod constants;

/// Data models: input view, signal bundle, closed vocabularies
pub mod models;

/// Brand signal extraction from gear metadata
pub mod brands;

/// Semantic context extraction from activity free text
pub mod semantic;

/// Guardrail validation with error accumulation and content sanitization
pub mod validation;

/// Signal derivation pipeline composing the individual extractors
pub mod pipeline;

pub use brands::extract_brand_signals;
pub use capabilities::{ContentPolicy, TextSignalExtractor};
pub use classification::is_moving_activity;
pub use models::{
    ActivitySignals, ActivitySignalsCore, Elevation, Gear, Intensity, ParseVocabularyError,
    SourceActivity, TimeOfDay,
};
pub use pipeline::derive_signals;
pub use semantic::extract_semantic_context;
pub use validation::{validate_signals, SignalValidationResult};
