// ABOUTME: Data models for signal derivation and validation
// ABOUTME: Input activity view, derived signal bundle, and closed vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Models Module
//!
//! Record types flowing through the signal pipeline. All types are plain
//! data with serde derives; none are mutated in place — each transform
//! returns a fresh value.

mod activity;
mod signals;
mod vocabulary;

pub use activity::{Gear, SourceActivity};
pub use signals::{ActivitySignals, ActivitySignalsCore};
pub use vocabulary::{Elevation, Intensity, ParseVocabularyError, TimeOfDay};
