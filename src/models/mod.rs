//! Domain models for the ConOps builder.
//!
//! # Core Concepts
//!
//! - [`ConOpsInput`]: the aggregate root a client submits — phases, gating
//!   entities, policies, and resource constraints. Validated structurally at
//!   the API boundary; domain feasibility is out of scope.
//! - [`SourceRule`] / [`ManualTimeBlock`]: the current split of timing
//!   gating — reusable source-bound rules vs. fixed interval overrides.
//! - [`WindowMask`]: the deprecated combined form of the two, still accepted
//!   for old clients and reinterpreted by `core::reconcile`.
//! - [`StoredProject`]: a named, immutable snapshot of an input document.

mod conops;
mod project;

pub use conops::*;
pub use project::*;
