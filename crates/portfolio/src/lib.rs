//! # Portfolio Registry
//!
//! The coordinating layer above the analytics engine: an in-memory registry
//! of projects that seeds new projects from templates, hands out dashboards,
//! and rolls the whole portfolio up into a single overview.
//!
//! ## Architectural Principles
//!
//! - **Thin Coordination:** This crate holds no computation of its own
//!   beyond tallying; progress and ROI figures always come from `analytics`.
//! - **Ownership:** A project aggregate owns its metrics, measurements,
//!   stakeholders, and deliverables. Removing a project removes them all.
//!
//! ## Public API
//!
//! - `ProjectRegistry`: The registry of project aggregates.
//! - `PortfolioOverview` / `ProjectDigest`: The cross-project rollup.
//! - `PortfolioError`: The specific error types returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod overview;
pub mod registry;

// Re-export the key components to create a clean, public-facing API.
pub use error::PortfolioError;
pub use overview::{PortfolioOverview, ProjectDigest};
pub use registry::ProjectRegistry;
