// ABOUTME: Injected capability traits consumed by the signal transforms
// ABOUTME: Content-safety policy and free-text signal extraction as explicit dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Injected Capabilities
//!
//! The signal transforms depend on two externally supplied capabilities:
//! a forbidden-content policy and a free-text signal extractor. Both are
//! passed as explicit trait-object arguments at every call site — there is
//! no registry, singleton, or ambient lookup. Blanket implementations let
//! plain closures satisfy the traits, which keeps test doubles trivial.

/// Content-safety policy deciding whether text is unsuitable to surface
/// downstream.
///
/// Implementations must be total over arbitrary UTF-8 input and read-only;
/// the transforms call the policy but never retain it.
pub trait ContentPolicy {
    /// Returns `true` iff `text` should be treated as disallowed.
    fn is_forbidden(&self, text: &str) -> bool;
}

impl<F> ContentPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_forbidden(&self, text: &str) -> bool {
        self(text)
    }
}

/// Opaque free-text signal source turning prose into topical signal
/// strings.
///
/// The extractor applies the supplied [`ContentPolicy`] internally to
/// discard disallowed segments; callers of this crate treat it as a black
/// box beyond that contract. `None` means the text produced no signals.
pub trait TextSignalExtractor {
    /// Extract zero or more topical signals from `text`.
    fn extract(&self, text: &str, policy: &dyn ContentPolicy) -> Option<Vec<String>>;
}

impl<F> TextSignalExtractor for F
where
    F: Fn(&str, &dyn ContentPolicy) -> Option<Vec<String>>,
{
    fn extract(&self, text: &str, policy: &dyn ContentPolicy) -> Option<Vec<String>> {
        self(text, policy)
    }
}
