//! # Value Analytics Engine
//!
//! This crate turns a project's recorded value data into dashboard-ready
//! numbers: per-metric progress toward target, per-metric ROI contributions,
//! deliverable status tallies, and a recent-measurements window.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `ValueEngine` is a stateless calculator.
//!   It takes an already-loaded `Project` snapshot as input and produces a
//!   `ValueDashboard` as output. This makes it highly reliable and easy to
//!   test.
//! - **Total Functions:** No operation here fails. Missing current values,
//!   degenerate baseline/target pairs, and empty collections all degrade to
//!   zero or absent results, because this is read-only reporting over data
//!   that was validated when it was persisted.
//!
//! ## Public API
//!
//! - `ValueEngine`: The main struct that contains the calculation logic.
//! - `ValueDashboard`: The standardized struct that holds a project's
//!   dashboard data.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::ValueEngine;
pub use report::{MetricSummary, ProjectInfo, RecentMeasurement, ValueDashboard};
