//! HostStar campaign intake library.
//!
//! Hosts the application draft model, the draft store, the submission
//! workflow state machine, and the intake endpoint router consumed by the
//! `hoststar-api` service.

pub mod campaign;
pub mod config;
pub mod error;
pub mod telemetry;
