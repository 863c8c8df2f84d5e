//! # Project Metric Templates
//!
//! Starter metric sets for each project type, so a newly created project
//! begins with the measurements its kind of work is usually judged by.
//!
//! ## Architectural Principles
//!
//! - **Extensibility:** Adding a project type means adding a `ProjectType`
//!   variant and a template arm; the compiler enforces that every type has
//!   a template.
//!
//! ## Public API
//!
//! - `metric_templates`: The factory function mapping a project type to its
//!   starter metrics.

pub mod factory;

pub use factory::metric_templates;
