// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for tokenview operations.
//!
//! Telemetry concerns are kept apart from business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a matching span
//! helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> T {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for building (or rebuilding) the registry indices.
///
/// Parent: caller's span
/// Children: none
#[inline]
pub(crate) fn build_registry(record_count: usize) -> Span {
    tracing::debug_span!("tokenview.build_registry", record_count = record_count)
}

/// Create span for resolving a denom or symbol.
///
/// Parent: caller's span
/// Children: none (sub-lookups emit trace events inside this span)
#[inline]
pub(crate) fn resolve(input: &str) -> Span {
    tracing::trace_span!("tokenview.resolve", input = %input)
}
