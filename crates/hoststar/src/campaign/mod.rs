//! Campaign-facing workflows.

pub mod application;
